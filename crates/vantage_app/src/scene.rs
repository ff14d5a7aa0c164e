/// The demo scene: three textured cubes (one spinning), two transparent
/// planes, an orbiting light with an unlit marker sphere.
///
/// Scene updates run before the renderer culls — `set_transform` refreshes
/// each instance's cached AABB, so visibility always tests current
/// placements.
use glam::{Mat4, Quat, Vec3, Vec4};

use vantage_core::{InputState, KeyCode, Time, Transform};
use vantage_renderer::{Blend, CollectionId, Light, Material, Mesh, PostEffect, Renderer};

pub struct DemoScene {
    cubes: CollectionId,
    marker: CollectionId,
    spin: f32,
    light_angle: f32,
    paused: bool,
}

impl DemoScene {
    pub fn build(renderer: &mut Renderer) -> Self {
        let device = renderer.context.device.clone();

        // Textured cubes — the instanced, culled collection.
        let cubes = renderer.add_collection(Mesh::cube(&device), Blend::Opaque);
        if let Some(collection) = renderer.collection_mut(cubes) {
            let banded = Material {
                texture_id: 1,
                ..Default::default()
            };
            collection.push(Mat4::IDENTITY, banded);
            collection.push(Mat4::from_translation(Vec3::new(2.0, 1.0, 2.0)), Material::default());
            collection.push(
                Mat4::from_translation(Vec3::new(-8.8, 0.3, -8.8)),
                Material::default(),
            );
        }

        // Transparent planes, blended back-to-front.
        let planes = renderer.add_collection(Mesh::plane(&device), Blend::Transparent);
        if let Some(collection) = renderer.collection_mut(planes) {
            collection.push(
                Mat4::from_translation(Vec3::new(-2.125, 1.0, -1.25)),
                Material {
                    base_color: Vec4::new(1.0, 0.0, 0.0, 0.4),
                    texture_id: 0,
                    ..Default::default()
                },
            );
            collection.push(
                Mat4::from_translation(Vec3::new(-1.125, 1.0, 3.25))
                    * Mat4::from_scale(Vec3::splat(2.0)),
                Material {
                    base_color: Vec4::new(0.0, 1.0, 0.0, 0.4),
                    texture_id: 1,
                    ..Default::default()
                },
            );
        }

        // Unlit marker sphere tracking the light.
        let marker = renderer.add_collection(Mesh::sphere(&device, 1.0), Blend::Opaque);
        if let Some(collection) = renderer.collection_mut(marker) {
            collection.push(Mat4::IDENTITY, Material::unlit(Vec4::ONE));
        }

        renderer.lights = vec![Light {
            position: Vec3::new(4.0, 3.0, 0.0),
            color: Vec3::splat(20.0),
        }];

        Self {
            cubes,
            marker,
            spin: 0.0,
            light_angle: 0.0,
            paused: false,
        }
    }

    pub fn update(&mut self, renderer: &mut Renderer, time: Time, input: &InputState) {
        if input.just_released(KeyCode::Space) {
            self.paused = !self.paused;
        }
        if input.just_released(KeyCode::KeyP) {
            renderer.post_effect = match renderer.post_effect {
                PostEffect::Passthrough => PostEffect::Grayscale,
                PostEffect::Grayscale => PostEffect::Passthrough,
            };
            log::info!("post effect: {:?}", renderer.post_effect);
        }

        if !self.paused {
            self.spin += time.delta * 0.8;
            self.light_angle += time.delta * 0.5;
        }

        // Spin the first two cubes; the second also carries a world offset.
        let spin = Transform {
            rotation: Quat::from_rotation_y(self.spin),
            ..Transform::IDENTITY
        };
        if let Some(collection) = renderer.collection_mut(self.cubes) {
            collection.set_transform(0, spin.matrix());
            collection.set_transform(
                1,
                Mat4::from_translation(Vec3::new(2.0, 1.0, 2.0)) * spin.matrix(),
            );
        }

        // Orbit the light and keep the marker glued to it.
        let light_pos = Vec3::new(
            4.0 * self.light_angle.cos(),
            3.0,
            4.0 * self.light_angle.sin(),
        );
        if let Some(light) = renderer.lights.first_mut() {
            light.position = light_pos;
        }
        if let Some(collection) = renderer.collection_mut(self.marker) {
            collection.set_transform(0, Transform::scaled_at(0.2, light_pos).matrix());
        }
    }
}
