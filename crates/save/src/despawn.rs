use bevy::prelude::*;

use simulation::buildings::{Building, TileRegistry};

/// Despawns every game entity immediately using direct world access and
/// clears the tile registry. Direct despawns (rather than deferred
/// `Commands`) mean the subsequent respawn never observes a mixed
/// old/new world.
pub(crate) fn despawn_all_game_entities(world: &mut World) {
    let entities: Vec<Entity> = {
        let mut q = world.query_filtered::<Entity, With<Building>>();
        q.iter(world).collect()
    };
    for entity in entities {
        if world.get_entity(entity).is_ok() {
            world.despawn(entity);
        }
    }
    world.resource_mut::<TileRegistry>().clear();
}
