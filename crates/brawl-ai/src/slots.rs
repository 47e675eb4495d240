//! Attack slot allocation around a shared target.

use glam::Vec2;

pub trait SlotAllocator {
    /// Position `unit_id` should stand at to attack `target_position`,
    /// given the ids of every unit currently attacking the same target.
    fn slot_position(
        &self,
        target_position: Vec2,
        unit_id: u32,
        attacker_ids: &[u32],
        slot_radius: f32,
    ) -> Vec2;
}

/// Spreads simultaneous attackers on a ring around the target instead of
/// letting them stack. Attacker ids are deduplicated and sorted
/// ascending; unit `u` gets the point at angle `2π · rank(u) / N`.
#[derive(Debug, Default)]
pub struct RingSlotAllocator;

impl SlotAllocator for RingSlotAllocator {
    fn slot_position(
        &self,
        target_position: Vec2,
        unit_id: u32,
        attacker_ids: &[u32],
        slot_radius: f32,
    ) -> Vec2 {
        if slot_radius <= 0.0 {
            return target_position;
        }

        let mut sorted: Vec<u32> = attacker_ids.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        // The requesting unit always occupies a slot, listed or not.
        let rank = match sorted.binary_search(&unit_id) {
            Ok(index) => index,
            Err(insert_at) => {
                sorted.insert(insert_at, unit_id);
                insert_at
            }
        };

        let angle = std::f32::consts::TAU * rank as f32 / sorted.len() as f32;
        target_position + Vec2::new(angle.cos(), angle.sin()) * slot_radius
    }
}
