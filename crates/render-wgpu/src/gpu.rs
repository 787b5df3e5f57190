use crate::camera::FlyCamera;
use crate::shader::{self, ShaderError};
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use candela_assets::{TextureData, TextureError};
use candela_scene::{SceneObject, Vertex, scene_objects};
use glam::Mat4;
use std::path::Path;
use wgpu::util::DeviceExt;

/// Errors from renderer construction. Everything fallible happens here,
/// before the frame loop; `render` itself does not fail.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Texture(#[from] TextureError),
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct SceneUniforms {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    object_color: [f32; 4],
    light_color: [f32; 4],
    light_pos: [f32; 4],
    view_pos: [f32; 4],
    uv_scale: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct LampUniforms {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

/// GPU-resident pieces of one draw-table entry.
struct GpuObject {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    texture_bind_group: wgpu::BindGroup,
}

/// wgpu still-life renderer: a lit pass over the scene table followed by
/// the unlit lamp indicator.
pub struct SceneRenderer {
    lit_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    lamp_uniform_buffer: wgpu::Buffer,
    lamp_bind_group: wgpu::BindGroup,
    objects: Vec<GpuObject>,
    lamp_vertex_buffer: wgpu::Buffer,
    lamp_vertex_count: u32,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        textures_dir: &Path,
    ) -> Result<Self, RenderError> {
        // Compile and link both programs before touching the GPU; failures
        // here carry the compiler log.
        shader::build_program(shaders::LIT_VERTEX, shaders::LIT_FRAGMENT)?;
        shader::build_program(shaders::LAMP_VERTEX, shaders::LAMP_FRAGMENT)?;

        let lit_vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lit_vertex"),
            source: wgpu::ShaderSource::Wgsl(shaders::LIT_VERTEX.into()),
        });
        let lit_fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lit_fragment"),
            source: wgpu::ShaderSource::Wgsl(shaders::LIT_FRAGMENT.into()),
        });
        let lamp_vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lamp_vertex"),
            source: wgpu::ShaderSource::Wgsl(shaders::LAMP_VERTEX.into()),
        });
        let lamp_fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lamp_fragment"),
            source: wgpu::ShaderSource::Wgsl(shaders::LAMP_FRAGMENT.into()),
        });

        // Uniform buffers and their layouts.
        let scene_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene_uniform_buffer"),
            contents: bytemuck::bytes_of(&SceneUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lamp_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lamp_uniform_buffer"),
            contents: bytemuck::bytes_of(&LampUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
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

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });
        let lamp_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lamp_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: lamp_uniform_buffer.as_entire_binding(),
            }],
        });

        // Pipelines. The meshes are open shells modeled without consistent
        // winding, so no back-face culling.
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3,
                1 => Float32x3,
                2 => Float32x2,
            ],
        };

        let lit_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lit_pipeline_layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });
        let lit_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lit_pipeline"),
            layout: Some(&lit_layout),
            vertex: wgpu::VertexState {
                module: &lit_vs,
                entry_point: Some(shaders::VS_ENTRY),
                compilation_options: Default::default(),
                buffers: &[vertex_layout.clone()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &lit_fs,
                entry_point: Some(shaders::FS_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let lamp_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lamp_pipeline_layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });
        let lamp_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lamp_pipeline"),
            layout: Some(&lamp_layout),
            vertex: wgpu::VertexState {
                module: &lamp_vs,
                entry_point: Some(shaders::VS_ENTRY),
                compilation_options: Default::default(),
                buffers: &[vertex_layout],
            },
            fragment: Some(wgpu::FragmentState {
                module: &lamp_fs,
                entry_point: Some(shaders::FS_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // One shared sampler: repeat wrap, linear filtering across mips.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("diffuse_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // Load every table entry: texture upload plus vertex buffer.
        let mut objects = Vec::with_capacity(scene_objects().len());
        for entry in scene_objects() {
            let path = textures_dir.join(entry.texture);
            let data = candela_assets::load_texture(&path)?;
            tracing::info!(
                object = entry.name,
                texture = %path.display(),
                width = data.width,
                height = data.height,
                "texture loaded"
            );
            let view = upload_texture(device, queue, &data, entry.name);
            let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(entry.name),
                layout: &texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });
            objects.push(GpuObject {
                vertex_buffer: vertex_buffer(device, entry),
                vertex_count: entry.vertex_count(),
                texture_bind_group,
            });
        }

        let lamp_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lamp_vertex_buffer"),
            contents: bytemuck::cast_slice(candela_scene::geometry::LAMP),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let lamp_vertex_count = candela_scene::geometry::LAMP.len() as u32;

        let depth_texture = Self::create_depth_texture(device, width, height);

        Ok(Self {
            lit_pipeline,
            lamp_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            lamp_uniform_buffer,
            lamp_bind_group,
            objects,
            lamp_vertex_buffer,
            lamp_vertex_count,
            depth_texture,
            surface_format,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame: the lit scene table in order, then the lamp.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &FlyCamera,
    ) {
        let view_matrix = camera.view_matrix();
        let projection = camera.projection_matrix();

        queue.write_buffer(
            &self.scene_uniform_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms {
                model: Mat4::IDENTITY.to_cols_array_2d(),
                view: view_matrix.to_cols_array_2d(),
                projection: projection.to_cols_array_2d(),
                object_color: candela_scene::OBJECT_COLOR.extend(1.0).to_array(),
                light_color: candela_scene::LIGHT_COLOR.extend(1.0).to_array(),
                light_pos: candela_scene::LIGHT_POSITION.extend(1.0).to_array(),
                view_pos: camera.position.extend(1.0).to_array(),
                uv_scale: [candela_scene::UV_SCALE.x, candela_scene::UV_SCALE.y, 0.0, 0.0],
            }),
        );

        let lamp_model = Mat4::from_translation(candela_scene::LIGHT_POSITION)
            * Mat4::from_scale(candela_scene::LIGHT_SCALE);
        queue.write_buffer(
            &self.lamp_uniform_buffer,
            0,
            bytemuck::bytes_of(&LampUniforms {
                model: lamp_model.to_cols_array_2d(),
                view: view_matrix.to_cols_array_2d(),
                projection: projection.to_cols_array_2d(),
            }),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let [r, g, b, a] = candela_scene::CLEAR_COLOR;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.lit_pipeline);
            pass.set_bind_group(0, &self.scene_bind_group, &[]);
            for object in &self.objects {
                pass.set_bind_group(1, &object.texture_bind_group, &[]);
                pass.set_vertex_buffer(0, object.vertex_buffer.slice(..));
                pass.draw(0..object.vertex_count, 0..1);
            }

            pass.set_pipeline(&self.lamp_pipeline);
            pass.set_bind_group(0, &self.lamp_bind_group, &[]);
            pass.set_vertex_buffer(0, self.lamp_vertex_buffer.slice(..));
            pass.draw(0..self.lamp_vertex_count, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

fn vertex_buffer(device: &wgpu::Device, entry: &SceneObject) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(entry.name),
        contents: bytemuck::cast_slice(entry.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// Upload a decoded image with its full mip chain and return the view.
fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    data: &TextureData,
    label: &str,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: data.mip_level_count(),
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (level, mip) in data.mip_chain().iter().enumerate() {
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: level as u32,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &mip.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * mip.width),
                rows_per_image: Some(mip.height),
            },
            wgpu::Extent3d {
                width: mip.width,
                height: mip.height,
                depth_or_array_layers: 1,
            },
        );
    }

    texture.create_view(&Default::default())
}
