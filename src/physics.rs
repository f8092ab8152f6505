//! rapier2d contact oracle
//!
//! A zero-gravity rapier world with exactly two bodies: a fixed cuboid
//! mirroring the paddle and a sensor ball mirroring the ball. Both are
//! overwritten from the simulation before every step; the only thing read
//! back is whether the two began to overlap. The ball is a sensor so the
//! solver never pushes the mirror out of the paddle between syncs.

use crossbeam_channel::Receiver;
use glam::Vec2;
use rapier2d::prelude::*;

use crate::consts::TICKS_PER_SECOND;
use crate::sim::{ContactOracle, GameState};

/// Contact oracle backed by a rapier2d physics pipeline
pub struct RapierContactOracle {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    events: ChannelEventCollector,
    collision_recv: Receiver<CollisionEvent>,
    contact_force_recv: Receiver<ContactForceEvent>,
    ball_body: RigidBodyHandle,
    paddle_body: RigidBodyHandle,
    ball_collider: ColliderHandle,
    paddle_collider: ColliderHandle,
    /// Overlap state after the last step
    touching: bool,
}

impl RapierContactOracle {
    /// Build the mirror world from the current ball and paddle
    pub fn new(state: &GameState) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let paddle = &state.paddle;
        let paddle_center = paddle.rect().center();
        let paddle_body = bodies.insert(
            RigidBodyBuilder::fixed()
                .translation(vector![paddle_center.x, paddle_center.y])
                .build(),
        );
        let paddle_collider = colliders.insert_with_parent(
            ColliderBuilder::cuboid(paddle.width / 2.0, paddle.height / 2.0)
                .friction(0.0)
                .build(),
            paddle_body,
            &mut bodies,
        );

        let ball = &state.ball;
        let ball_body = bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![ball.pos.x, ball.pos.y])
                .linear_damping(0.0)
                .build(),
        );
        let ball_collider = colliders.insert_with_parent(
            ColliderBuilder::ball(ball.radius)
                .sensor(true)
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build(),
            ball_body,
            &mut bodies,
        );

        let (collision_send, collision_recv) = crossbeam_channel::unbounded();
        let (contact_force_send, contact_force_recv) = crossbeam_channel::unbounded();

        log::debug!("Contact oracle ready");

        Self {
            gravity: vector![0.0, 0.0],
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            events: ChannelEventCollector::new(collision_send, contact_force_send),
            collision_recv,
            contact_force_recv,
            ball_body,
            paddle_body,
            ball_collider,
            paddle_collider,
            touching: false,
        }
    }

    fn is_ball_paddle_pair(&self, a: ColliderHandle, b: ColliderHandle) -> bool {
        (a == self.ball_collider && b == self.paddle_collider)
            || (a == self.paddle_collider && b == self.ball_collider)
    }
}

impl ContactOracle for RapierContactOracle {
    fn sync_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Some(body) = self.bodies.get_mut(self.ball_body) {
            body.set_translation(vector![pos.x, pos.y], true);
            // rapier integrates per second, the simulation per tick
            let vel = vel * TICKS_PER_SECOND;
            body.set_linvel(vector![vel.x, vel.y], true);
        }
    }

    fn sync_paddle(&mut self, center: Vec2) {
        if let Some(body) = self.bodies.get_mut(self.paddle_body) {
            body.set_translation(vector![center.x, center.y], false);
        }
    }

    fn step(&mut self) -> bool {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &self.events,
        );

        while self.contact_force_recv.try_recv().is_ok() {}

        let was_touching = self.touching;
        while let Ok(event) = self.collision_recv.try_recv() {
            match event {
                CollisionEvent::Started(a, b, _) if self.is_ball_paddle_pair(a, b) => {
                    self.touching = true;
                }
                CollisionEvent::Stopped(a, b, _) if self.is_ball_paddle_pair(a, b) => {
                    self.touching = false;
                }
                _ => {}
            }
        }
        !was_touching && self.touching
    }
}
