//! Collision query engine and callback dispatch.
//!
//! One pass per game-loop tick: [`collision_pass`] collects every entity
//! bearing a hit or hurt box, scans all pairs for type-compatible overlaps
//! ([`find_collisions`]), then invokes the reaction callbacks registered on
//! the boxes ([`dispatch_collisions`]).
//!
//! The scan is fully computed before any callback runs, and callbacks only
//! receive [`Commands`], so structural changes they make (despawning an
//! entity, removing a box) are deferred to the end of the pass and become
//! visible on the next one. A panicking callback unwinds and aborts the
//! remainder of the pass.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::components::hitbox::HitBox;
use crate::components::hurtbox::HurtBox;
use crate::components::mapposition::MapPosition;
use crate::error::CollisionError;
use crate::events::collision::{CollisionEvent, CollisionKind};
use crate::geometry::Manifold;

/// Snapshot of one population entry for the pairwise scan.
struct Candidate<'w> {
    entity: Entity,
    position: MapPosition,
    hit: Option<&'w HitBox>,
    hurt: Option<&'w HurtBox>,
}

fn pair_key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a < b { (a, b) } else { (b, a) }
}

/// Scan the given population for type-compatible overlapping box pairs.
///
/// Entities without any box component are ignored. A box-bearing entity
/// without a [`MapPosition`] is a caller contract violation and yields
/// [`CollisionError::MissingComponent`]; the engine never skips it silently.
///
/// Hit-to-hurt and hit-to-hit compatibility rules are evaluated
/// independently, but each unordered pair is reported at most once per pass
/// no matter how many rules match. Output order is deterministic for a fixed
/// input order; callers must not rely on it beyond reproducibility.
pub fn find_collisions(
    world: &World,
    entities: &[Entity],
) -> Result<Vec<CollisionEvent>, CollisionError> {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(entities.len());
    for &entity in entities {
        let hit = world.get::<HitBox>(entity);
        let hurt = world.get::<HurtBox>(entity);
        if hit.is_none() && hurt.is_none() {
            continue;
        }
        let position = world.get::<MapPosition>(entity).copied().ok_or(
            CollisionError::MissingComponent {
                entity,
                component: "MapPosition",
            },
        )?;
        candidates.push(Candidate {
            entity,
            position,
            hit,
            hurt,
        });
    }

    let mut events: Vec<CollisionEvent> = Vec::new();
    let mut reported: FxHashSet<(Entity, Entity)> = FxHashSet::default();

    for a in &candidates {
        let hit_a = match a.hit {
            Some(hit) => hit,
            None => continue,
        };
        let rect_a = hit_a.rect(&a.position);

        for b in &candidates {
            if a.entity == b.entity {
                continue;
            }

            // hit -> hurt rule
            if let Some(hurt_b) = b.hurt {
                if hit_a.targets_hurtbox(hurt_b.kind())
                    && !reported.contains(&pair_key(a.entity, b.entity))
                {
                    let manifold = Manifold::between(&rect_a, &hurt_b.rect(&b.position));
                    if manifold.overlapping() {
                        reported.insert(pair_key(a.entity, b.entity));
                        trace!(
                            "collision {:?} -> {:?} via hurtbox, overlap {}x{}",
                            a.entity, b.entity, manifold.width, manifold.height
                        );
                        events.push(CollisionEvent {
                            a: a.entity,
                            b: b.entity,
                            manifold,
                            kind: CollisionKind::HitHurt,
                        });
                    }
                }
            }

            // hit -> hit rule
            if let Some(hit_b) = b.hit {
                if hit_a.targets_hitbox(hit_b.kind())
                    && !reported.contains(&pair_key(a.entity, b.entity))
                {
                    let manifold = Manifold::between(&rect_a, &hit_b.rect(&b.position));
                    if manifold.overlapping() {
                        reported.insert(pair_key(a.entity, b.entity));
                        trace!(
                            "collision {:?} -> {:?} via hitbox, overlap {}x{}",
                            a.entity, b.entity, manifold.width, manifold.height
                        );
                        events.push(CollisionEvent {
                            a: a.entity,
                            b: b.entity,
                            manifold,
                            kind: CollisionKind::HitHit,
                        });
                    }
                }
            }
        }
    }

    Ok(events)
}

/// Invoke the reaction callbacks for each collision event, in order.
///
/// Per event the order is fixed: the hitting side's `on_hit`, then for
/// hit-to-hurt events the target's `on_hurt` followed by the target's
/// `on_hit`. Absent callbacks are no-ops. All callbacks share one deferred
/// command queue, applied once after the last event.
pub fn dispatch_collisions(world: &mut World, events: &[CollisionEvent]) {
    let mut state: SystemState<(Query<&HitBox>, Query<&HurtBox>, Commands)> =
        SystemState::new(world);
    {
        let (hitboxes, hurtboxes, mut commands) = state.get_mut(world);
        for event in events {
            if let Ok(hit) = hitboxes.get(event.a) {
                if let Some(on_hit) = &hit.on_hit {
                    on_hit(event.a, event.b, &event.manifold, &mut commands);
                }
            }
            if event.kind == CollisionKind::HitHurt {
                if let Ok(hurt) = hurtboxes.get(event.b) {
                    if let Some(on_hurt) = &hurt.on_hurt {
                        on_hurt(event.b, event.a, &mut commands);
                    }
                    if let Some(on_hit) = &hurt.on_hit {
                        on_hit(event.b, event.a, &event.manifold, &mut commands);
                    }
                }
            }
        }
    }
    state.apply(world);
}

/// Run one full collision pass: query, dispatch, apply deferred commands.
///
/// The population is every entity currently bearing a [`HitBox`] or
/// [`HurtBox`]. Returns the events of this pass for inspection.
pub fn collision_pass(world: &mut World) -> Result<Vec<CollisionEvent>, CollisionError> {
    let mut population = world.query_filtered::<Entity, Or<(With<HitBox>, With<HurtBox>)>>();
    let entities: Vec<Entity> = population.iter(world).collect();

    let events = find_collisions(world, &entities)?;
    debug!(
        "collision pass: {} candidates, {} events",
        entities.len(),
        events.len()
    );
    dispatch_collisions(world, &events);
    Ok(events)
}
