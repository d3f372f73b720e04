use crate::constants::*;
use crate::core::{
    generate_field, generate_orb_cloud, generate_snow, generate_sparkles, star_sparkles,
    ParticleVertex, ORBS,
};
use glam::{Mat4, Vec3};
use web_sys as web;

mod particles;
mod star;

use particles::{draw_emitter, Emitter, EmitterMode, EmitterUniforms, ParticlePipeline};

/// Per-orb draw parameters computed by the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct OrbDraw {
    pub position: Vec3,
    pub morph: f32,
}

/// Everything the renderer needs for one frame, assembled by `frame::tick`.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    pub view_proj: Mat4,
    pub field_morph: f32,
    /// Smoothed field rotation, radians (x pitch, y yaw).
    pub field_rotation: [f32; 2],
    pub orbs: [OrbDraw; 3],
    pub star_y: f32,
    pub star_spin: f32,
    pub star_pulse: f32,
    pub glow_pulse: f32,
}

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    particle_pipeline: ParticlePipeline,
    field: Emitter,
    snow: Emitter,
    sparkles: Emitter,
    orb_clouds: Vec<Emitter>,
    star_sparkle_ring: Emitter,
    star: star::StarResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particle_pipeline = particles::create_particle_pipeline(&device, format);
        let field = particle_pipeline.create_emitter(
            &device,
            "field",
            EmitterMode::Field,
            &generate_field(FIELD_SEED),
        );
        let snow = particle_pipeline.create_emitter(
            &device,
            "snow",
            EmitterMode::Snow,
            &generate_snow(SNOW_SEED),
        );
        let sparkles = particle_pipeline.create_emitter(
            &device,
            "sparkles",
            EmitterMode::Sparkle,
            &generate_sparkles(SPARKLE_SEED),
        );
        let orb_clouds = ORBS
            .iter()
            .map(|cfg| {
                particle_pipeline.create_emitter(
                    &device,
                    "orb_cloud",
                    EmitterMode::Orb,
                    &generate_orb_cloud(ORB_CLOUD_SEED ^ cfg.id as u64),
                )
            })
            .collect();
        let ring: Vec<ParticleVertex> = star_sparkles(STAR_SPARKLE_SEED)
            .into_iter()
            .map(|pos| ParticleVertex {
                scatter_pos: pos,
                shape_pos: pos,
                color: [1.0, 0.98, 0.8],
                params: [0.0; 3],
            })
            .collect();
        let star_sparkle_ring =
            particle_pipeline.create_emitter(&device, "star_ring", EmitterMode::Sparkle, &ring);
        let star = star::create_star_resources(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particle_pipeline,
            field,
            snow,
            sparkles,
            orb_clouds,
            star_sparkle_ring,
            star,
            width,
            height,
            // Deep evergreen backdrop (#001a0f), linearized for an sRGB target.
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0116,
                b: 0.0053,
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn write_emitter(&self, emitter: &Emitter, view_proj: Mat4, model: Mat4, tint: [f32; 4], morph: f32, size: f32) {
        let u = EmitterUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            tint,
            anim: [
                self.time_accum,
                morph,
                self.time_accum * COLOR_PHASE_RATE,
                size,
            ],
            screen: [
                self.width as f32,
                self.height as f32,
                emitter.mode as u32 as f32,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&emitter.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub fn render(&mut self, dt_sec: f32, scene: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let vp = scene.view_proj;

        // Per-emitter uniforms for this frame.
        let snow_model = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        self.write_emitter(&self.snow, vp, snow_model, [1.0; 4], 0.0, SNOW_POINT_SIZE);

        let drift = Mat4::from_rotation_y(self.time_accum * 0.05)
            * Mat4::from_rotation_x((self.time_accum * 0.1).sin() * 0.1);
        self.write_emitter(&self.sparkles, vp, drift, [1.0; 4], 0.0, SPARKLE_POINT_SIZE);

        let field_model = Mat4::from_rotation_x(scene.field_rotation[0])
            * Mat4::from_rotation_y(scene.field_rotation[1]);
        self.write_emitter(
            &self.field,
            vp,
            field_model,
            [1.0; 4],
            scene.field_morph,
            FIELD_POINT_SIZE,
        );

        for (i, cloud) in self.orb_clouds.iter().enumerate() {
            let draw = &scene.orbs[i];
            let model = Mat4::from_translation(draw.position)
                * Mat4::from_rotation_y(if draw.morph > 0.5 {
                    self.time_accum * 0.3
                } else {
                    0.0
                });
            let cfg = &ORBS[i];
            self.write_emitter(
                cloud,
                vp,
                model,
                [cfg.color[0], cfg.color[1], cfg.color[2], 1.0],
                draw.morph,
                ORB_POINT_SIZE_BASE,
            );
        }

        let star_model = Mat4::from_translation(Vec3::new(0.0, scene.star_y, 0.0))
            * Mat4::from_rotation_y(scene.star_spin);
        self.star
            .write_uniforms(&self.queue, vp, star_model, scene.star_pulse, scene.glow_pulse);
        let ring_model = star_model * Mat4::from_rotation_z(self.time_accum * 0.3);
        self.write_emitter(
            &self.star_sparkle_ring,
            vp,
            ring_model,
            [1.0; 4],
            0.0,
            SPARKLE_POINT_SIZE,
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Back-to-front: ambient layers, the field, ornaments, star.
            draw_emitter(&mut rpass, &self.particle_pipeline, &self.snow);
            draw_emitter(&mut rpass, &self.particle_pipeline, &self.sparkles);
            draw_emitter(&mut rpass, &self.particle_pipeline, &self.field);
            for cloud in &self.orb_clouds {
                draw_emitter(&mut rpass, &self.particle_pipeline, cloud);
            }
            self.star.draw(&mut rpass);
            draw_emitter(&mut rpass, &self.particle_pipeline, &self.star_sparkle_ring);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
