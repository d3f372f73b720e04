use crate::core::star::{
    star_mesh, GLOW_INNER_RADIUS, GLOW_OUTER_RADIUS, STAR_INNER_RADIUS, STAR_OUTER_RADIUS,
    STAR_POINTS,
};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) emissive: [f32; 4],
}

struct StarLayer {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Main star and a larger translucent glow layer behind it.
pub(crate) struct StarResources {
    pipeline: wgpu::RenderPipeline,
    main: StarLayer,
    glow: StarLayer,
}

fn create_layer(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    label: &str,
    outer: f32,
    inner: f32,
) -> StarLayer {
    let (positions, indices) = star_mesh(outer, inner, STAR_POINTS);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<StarUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    StarLayer {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
) -> StarResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("star_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::STAR_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("star_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("star_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("star_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_star"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: 12,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_star"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let main = create_layer(device, &bgl, "star_main", STAR_OUTER_RADIUS, STAR_INNER_RADIUS);
    let glow = create_layer(device, &bgl, "star_glow", GLOW_OUTER_RADIUS, GLOW_INNER_RADIUS);
    StarResources {
        pipeline,
        main,
        glow,
    }
}

impl StarResources {
    /// Upload this frame's transforms: the glow layer sits slightly behind
    /// the main star and scales with its own pulse.
    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        view_proj: glam::Mat4,
        star_model: glam::Mat4,
        pulse: f32,
        glow_scale: f32,
    ) {
        let main = StarUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: star_model.to_cols_array_2d(),
            color: [1.0, 0.84, 0.0, 1.0],
            emissive: [pulse, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.main.uniform_buffer, 0, bytemuck::bytes_of(&main));

        let glow_model = star_model
            * glam::Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -0.05))
            * glam::Mat4::from_scale(glam::Vec3::splat(glow_scale));
        let glow = StarUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: glow_model.to_cols_array_2d(),
            color: [1.0, 0.84, 0.0, 0.3],
            emissive: [0.0, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.glow.uniform_buffer, 0, bytemuck::bytes_of(&glow));
    }

    pub(crate) fn draw<'p>(&'p self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_pipeline(&self.pipeline);
        for layer in [&self.glow, &self.main] {
            rpass.set_bind_group(0, &layer.bind_group, &[]);
            rpass.set_vertex_buffer(0, layer.vertex_buffer.slice(..));
            rpass.set_index_buffer(layer.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..layer.index_count, 0, 0..1);
        }
    }
}
