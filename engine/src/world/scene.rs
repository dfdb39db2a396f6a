//! Scene Entity Table
//!
//! Owns every actor on the island behind stable [`EntityId`] handles and
//! answers the composite collision query used by the walking and flight
//! controllers.

use glam::Vec3;

use super::entity::{AircraftKind, Entity, EntityId, EntityKind};
use super::layout;
use crate::physics::{ClosedCurve, CurveError, HANGAR_CUTOUT, ObstacleShape};

/// An obstacle reported by [`Scene::first_collision`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec3,
}

/// Handles of the named actors, fixed when the scene is built.
#[derive(Clone, Debug)]
pub struct SceneSlots {
    pub island: EntityId,
    pub runway: EntityId,
    pub tower: EntityId,
    pub antenna: EntityId,
    pub stones: [EntityId; 2],
    pub hangars: [EntityId; 2],
    pub jet: EntityId,
    pub fighter: EntityId,
    pub retro: EntityId,
    pub helicopter: EntityId,
    pub lamps: Vec<EntityId>,
    pub spot_lights: Vec<EntityId>,
}

/// Collision shape of an entity kind.
pub fn obstacle_shape(kind: EntityKind) -> ObstacleShape {
    match kind {
        EntityKind::Hangar => ObstacleShape::Hollow {
            cutout: HANGAR_CUTOUT,
        },
        _ => ObstacleShape::Solid,
    }
}

/// The island's actors.
#[derive(Clone, Debug)]
pub struct Scene {
    entities: Vec<Option<Entity>>,
    slots: SceneSlots,
    helicopter_curve: ClosedCurve,
}

impl Scene {
    /// Build the island from its spawn tables. The helicopter loop starts at
    /// `start_time` and is placed on its curve immediately.
    pub fn new(helicopter_speed: f32, start_time: f32) -> Result<Self, CurveError> {
        let helicopter_curve = ClosedCurve::from_slice(&layout::HELICOPTER_CURVE)?;
        let mut entities = Vec::with_capacity(32);
        let mut spawn = |entity: Entity| {
            entities.push(Some(entity));
            EntityId(entities.len() as u32 - 1)
        };

        let island = spawn(layout::island());
        let runway = spawn(layout::runway());
        let tower = spawn(layout::tower());
        let antenna = spawn(layout::antenna());
        let [hangar_front, hangar_back] = layout::hangars();
        let hangars = [spawn(hangar_front), spawn(hangar_back)];
        let [stone_front, stone_back] = layout::stones();
        let stones = [spawn(stone_front), spawn(stone_back)];
        let jet = spawn(layout::aircraft(AircraftKind::Jet));
        let fighter = spawn(layout::aircraft(AircraftKind::Fighter));
        let retro = spawn(layout::aircraft(AircraftKind::Retro));
        let helicopter = spawn(layout::helicopter(helicopter_speed, start_time));
        let lamps = layout::lamps().into_iter().map(&mut spawn).collect();
        let spot_lights = layout::spot_lights().into_iter().map(&mut spawn).collect();

        let mut scene = Self {
            entities,
            slots: SceneSlots {
                island,
                runway,
                tower,
                antenna,
                stones,
                hangars,
                jet,
                fighter,
                retro,
                helicopter,
                lamps,
                spot_lights,
            },
            helicopter_curve,
        };
        scene.update_helicopter(start_time);
        Ok(scene)
    }

    pub fn slots(&self) -> &SceneSlots {
        &self.slots
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Remove an entity. Returns it if it was still alive.
    pub fn destroy(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.get_mut(id.0 as usize).and_then(Option::take)
    }

    /// Live entities with their handles, in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EntityId(i as u32), e)))
    }

    pub fn aircraft_id(&self, kind: AircraftKind) -> EntityId {
        match kind {
            AircraftKind::Jet => self.slots.jet,
            AircraftKind::Fighter => self.slots.fighter,
            AircraftKind::Retro => self.slots.retro,
        }
    }

    pub fn helicopter_id(&self) -> EntityId {
        self.slots.helicopter
    }

    pub fn helicopter(&self) -> Option<&Entity> {
        self.get(self.slots.helicopter)
    }

    pub fn helicopter_curve(&self) -> &ClosedCurve {
        &self.helicopter_curve
    }

    /// Move the helicopter along its loop, if it still exists.
    pub fn update_helicopter(&mut self, time: f32) {
        let slot = self.slots.helicopter.0 as usize;
        if let Some(helicopter) = self.entities.get_mut(slot).and_then(Option::as_mut) {
            helicopter.follow_curve(&self.helicopter_curve, time);
        }
    }

    /// Obstacles in the order the composite collision test visits them.
    fn obstacle_order(&self) -> [EntityId; 10] {
        let s = &self.slots;
        [
            s.tower,
            s.antenna,
            s.stones[0],
            s.stones[1],
            s.hangars[0],
            s.hangars[1],
            s.jet,
            s.fighter,
            s.retro,
            s.helicopter,
        ]
    }

    /// First obstacle a mover at `pos` with box `my_box` overlaps.
    ///
    /// `exclude` skips one entity, normally the aircraft doing the moving.
    /// Destroyed entities are skipped.
    pub fn first_collision(
        &self,
        pos: Vec3,
        my_box: Vec3,
        exclude: Option<EntityId>,
    ) -> Option<Hit> {
        self.obstacle_order()
            .into_iter()
            .filter(|id| Some(*id) != exclude)
            .filter_map(|id| self.get(id).map(|e| (id, e)))
            .find(|(_, e)| {
                obstacle_shape(e.kind).collides(pos, my_box, e.position, e.bounding_box)
            })
            .map(|(id, e)| Hit {
                id,
                kind: e.kind,
                position: e.position,
            })
    }

    /// Map a pick id onto a destructible vehicle.
    pub fn vehicle_for_pick(&self, pick_id: u8) -> Option<EntityId> {
        match pick_id {
            layout::HELICOPTER_PICK_ID => Some(self.slots.helicopter),
            layout::JET_PICK_ID => Some(self.slots.jet),
            layout::FIGHTER_PICK_ID => Some(self.slots.fighter),
            layout::RETRO_PICK_ID => Some(self.slots.retro),
            _ => None,
        }
    }

    /// Pick id a renderer should tag this entity with, if it is pickable.
    ///
    /// Lamps and spot lights carry their light id; vehicles carry a fixed id.
    pub fn pick_id(&self, id: EntityId) -> Option<u8> {
        let s = &self.slots;
        if id == s.helicopter {
            return Some(layout::HELICOPTER_PICK_ID);
        }
        if id == s.jet {
            return Some(layout::JET_PICK_ID);
        }
        if id == s.fighter {
            return Some(layout::FIGHTER_PICK_ID);
        }
        if id == s.retro {
            return Some(layout::RETRO_PICK_ID);
        }
        s.lamps
            .iter()
            .chain(s.spot_lights.iter())
            .position(|light| *light == id)
            .map(|i| layout::FIRST_PICKABLE_LIGHT + i as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(0.3, 0.0).unwrap()
    }

    #[test]
    fn test_walking_into_tower_hits_tower() {
        let scene = scene();
        let hit = scene
            .first_collision(Vec3::new(-6.0, 1.0, 34.0), Vec3::ZERO, None)
            .unwrap();
        assert_eq!(hit.kind, EntityKind::Tower);
        assert_eq!(hit.id, scene.slots().tower);
    }

    #[test]
    fn test_open_ground_is_clear() {
        let scene = scene();
        assert!(scene.first_collision(Vec3::new(5.0, 1.0, 25.0), Vec3::ZERO, None).is_none());
    }

    #[test]
    fn test_excluded_aircraft_is_skipped() {
        let scene = scene();
        let jet = scene.slots().jet;
        let pos = scene.get(jet).unwrap().position;
        let bbox = scene.get(jet).unwrap().bounding_box;
        assert_eq!(scene.first_collision(pos, bbox, Some(jet)), None);
        assert_eq!(scene.first_collision(pos, bbox, None).map(|h| h.id), Some(jet));
    }

    #[test]
    fn test_destroyed_entity_no_longer_collides() {
        let mut scene = scene();
        let tower = scene.slots().tower;
        assert!(scene.destroy(tower).is_some());
        assert!(scene.destroy(tower).is_none());
        assert!(scene.first_collision(Vec3::new(-6.0, 1.0, 34.0), Vec3::ZERO, None).is_none());
    }

    #[test]
    fn test_pick_ids_round_trip() {
        let scene = scene();
        for pick in [40u8, 41, 42, 43] {
            let id = scene.vehicle_for_pick(pick).unwrap();
            assert_eq!(scene.pick_id(id), Some(pick));
        }
        assert_eq!(scene.pick_id(scene.slots().lamps[0]), Some(2));
        assert_eq!(scene.pick_id(scene.slots().spot_lights[12]), Some(17));
        assert_eq!(scene.pick_id(scene.slots().tower), None);
    }

    #[test]
    fn test_helicopter_placed_on_curve_at_start() {
        let scene = scene();
        let heli = scene.helicopter().unwrap();
        assert!((heli.position - layout::HELICOPTER_CURVE[0]).length() < 1e-4);
    }
}
