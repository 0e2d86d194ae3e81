//! `AgentRegistry` — the dogs currently on (or near) the screen.
//!
//! The population is small and churns constantly, so dogs are stored as a
//! plain `Vec<Dog>` in spawn order.  There is no explicit cap: every dog walks
//! in a straight line and is culled once it leaves the margin band, which
//! bounds the population by spawn rate × crossing time.

use pt_core::{IdCounter, Millis, Point, RandomSource, TrailConfig, ViewportSize, WalkId};
use tracing::debug;

use crate::{Dog, SpawnEdge, sample_dog};

#[derive(Default)]
pub struct AgentRegistry {
    dogs: Vec<Dog>,
    ids:  IdCounter,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dog> + '_ {
        self.dogs.iter()
    }

    /// Mutable access for the per-tick pass.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Dog> + '_ {
        self.dogs.iter_mut()
    }

    pub fn get(&self, id: WalkId) -> Option<&Dog> {
        self.dogs.iter().find(|d| d.id == id)
    }

    /// Reserve a fresh id for a dog about to be inserted.
    pub fn mint_id(&mut self) -> WalkId {
        self.ids.mint()
    }

    /// Add a dog built elsewhere (e.g. a fixture).  Returns its id.
    pub fn insert(&mut self, dog: Dog) -> WalkId {
        let id = dog.id;
        self.dogs.push(dog);
        id
    }

    /// Place a dog at an explicit position with an explicit heading.
    pub fn spawn_at(
        &mut self,
        position: Point,
        heading:  f64,
        speed:    f64,
        size:     f64,
        now:      Millis,
    ) -> WalkId {
        let id = self.mint_id();
        self.insert(Dog::new(id, position, heading, speed, size, now))
    }

    /// Sample a new dog from a random edge and add it.
    pub fn spawn<R: RandomSource + ?Sized>(
        &mut self,
        rng:      &mut R,
        viewport: ViewportSize,
        config:   &TrailConfig,
        now:      Millis,
    ) -> (SpawnEdge, WalkId) {
        let id = self.mint_id();
        let (edge, dog) = sample_dog(id, rng, viewport, config, now);
        debug!(
            walk = %id,
            edge = %edge,
            x = dog.position.x,
            y = dog.position.y,
            heading = dog.heading,
            speed = dog.speed,
            size = dog.size,
            "dog spawned"
        );
        self.insert(dog);
        (edge, id)
    }

    /// Drop every dog outside the viewport grown by `margin`.
    ///
    /// Returns the ids of the dropped dogs in registry order.
    pub fn cull_outside(&mut self, viewport: ViewportSize, margin: f64) -> Vec<WalkId> {
        let mut evicted = Vec::new();
        self.dogs.retain(|dog| {
            let keep = viewport.contains_with_margin(dog.position, margin);
            if !keep {
                debug!(walk = %dog.id, x = dog.position.x, y = dog.position.y, "dog left the viewport");
                evicted.push(dog.id);
            }
            keep
        });
        evicted
    }
}
