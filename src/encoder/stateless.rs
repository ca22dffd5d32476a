// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fmt::Debug;

use thiserror::Error;

use crate::encoder::vp8::PictureParameters;
use crate::encoder::vp8::QuantData;
use crate::encoder::vp8::SequenceParameters;

pub mod vp8;

#[derive(Error, Debug)]
pub enum StatelessBackendError {
    #[error("not enough resources to proceed with the operation now")]
    OutOfResources,
    #[error("failed to lock {0}")]
    LockFailed(&'static str),
    #[error("invalid resource handle")]
    InvalidResource,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StatelessBackendResult<T> = Result<T, StatelessBackendError>;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("{0} is not available")]
    NullInterface(&'static str),
    #[error("unsupported")]
    Unsupported,
    #[error("invalid internal state. This is likely a bug.")]
    InvalidInternalState,
    #[error(transparent)]
    BackendError(#[from] StatelessBackendError),
}

pub type EncodeResult<T> = Result<T, EncodeError>;

/// GPU engines the encoder submits work to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuContext {
    /// Render engine running the encoding kernels
    Render,
    /// Video engine running the bitstream packer
    Video,
}

/// Tag attached to submitted work for performance accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerfTag {
    Scaling,
    Me,
    MbEncPhase1,
    MbEncPhase2,
    IntraDistortion,
    BrcInitReset,
    BrcUpdate,
    Mpu,
    Tpu,
    Pak,
}

/// Identifies a kernel state, i.e. a kernel binary together with its state heap allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelId {
    Scaling,
    Me,
    MbEncILuma,
    MbEncIChroma,
    MbEncP,
    BrcIFrameDist,
    BrcInit,
    BrcReset,
    BrcUpdate,
    Mpu,
    Tpu,
}

/// Space assigned in the dynamic state heap to a kernel. The curbe of the kernel lives at
/// `curbe_offset` within `heap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DshRegion<R> {
    pub heap: R,
    pub curbe_offset: u32,
    pub curbe_size: u32,
}

/// How a resource is exposed to a kernel through its binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceBinding<R> {
    /// Linear window of a buffer
    Buffer {
        resource: R,
        offset: u32,
        size: u32,
        writable: bool,
    },
    /// 2D surface accessed with media block messages
    Surface2d { resource: R, writable: bool },
    /// Surface sampled by the motion estimation engine
    Vme { resource: R },
}

impl<R> SurfaceBinding<R> {
    pub fn resource(&self) -> &R {
        match self {
            SurfaceBinding::Buffer { resource, .. } => resource,
            SurfaceBinding::Surface2d { resource, .. } => resource,
            SurfaceBinding::Vme { resource } => resource,
        }
    }
}

/// MMIO offsets of the MFX registers read back after every PAK pass. The values are platform
/// specific and provided by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MfxMmioRegisters {
    pub bitstream_byte_count: u32,
    pub image_status_mask: u32,
    pub image_status_ctrl: u32,
    pub dq_index: u32,
    pub d_loop_filter: u32,
    pub cumulative_dq_index01: u32,
    pub cumulative_dq_index23: u32,
    pub cumulative_loop_filter01: u32,
    pub cumulative_loop_filter23: u32,
    pub convergence_status: u32,
}

/// Condition evaluated by the GPU to skip the remainder of a PAK pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipPredicate {
    /// Ends the pass when the previous bitrate control pass already converged. The compared
    /// value is the image status control written by the previous pass.
    BrcPassContinuation,
    /// Ends the RePAK pass unless the TPU kernel decided it has to run. The compared value is
    /// the RePAK decision surface written by the TPU kernel.
    RepakDecision,
}

/// Pixel surfaces programmed into the MFX engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRole {
    Reconstructed,
    Source,
}

/// Buffers used by the VP8 bitstream packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspBuffers<R> {
    pub frame_header: R,
    pub intermediate: R,
    pub partition0_offset: u32,
    pub partition0_size: u32,
    pub token_partitions_size: u32,
    pub num_partitions: u32,
    pub coded_buffer: R,
    pub coeff_probs: R,
    pub token_statistics: R,
    pub mpu_bitstream: R,
    pub tpu_bitstream: R,
    pub entropy_cost: R,
}

/// Inputs of the MFX VP8 encoder configuration command.
pub struct EncoderCfgParams<'a> {
    pub sequence: &'a SequenceParameters,
    pub picture: &'a PictureParameters,
    pub quant: &'a QuantData,
    pub first_pass: bool,
    pub brc_enabled: bool,
    /// Size of the buffer receiving the command.
    pub cfg_buffer_size: usize,
}

/// Dispatch order of the thread groups of a media walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerPattern {
    /// Macroblocks have no dependency on each other
    NoDependency,
    /// Each macroblock waits for its left, top-left, top and top-right neighbours
    Degree45,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerParams {
    pub resolution_x: u32,
    pub resolution_y: u32,
    pub pattern: WalkerPattern,
    pub use_scoreboard: bool,
}

/// Commands recorded into a [`CommandBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<R> {
    MfxPipeModeSelect {
        pre_deblock_out: bool,
        post_deblock_out: bool,
    },
    MfxSurfaceState {
        role: SurfaceRole,
        surface: R,
    },
    MfxPipeBufAddr {
        pre_deblock: Option<R>,
        post_deblock: Option<R>,
        raw: R,
        references: Vec<R>,
        intra_row_store: R,
    },
    MfxIndObjBaseAddr {
        mb_code: R,
        mv_offset: u32,
    },
    MfxVp8BspBufBaseAddr(BspBuffers<R>),
    BatchBufferStart {
        buffer: R,
        offset: u32,
    },
    BatchBufferEnd,
    /// Ends the batch depending on the DWORD at `offset` in `buffer`, as selected by `predicate`.
    ConditionalBatchBufferEnd {
        predicate: SkipPredicate,
        buffer: R,
        offset: u32,
    },
    StoreRegisterMem {
        register: u32,
        buffer: R,
        offset: u32,
    },
    StoreDataImm {
        buffer: R,
        offset: u32,
        value: u32,
    },
    FlushDw,
    MediaObject {
        kernel: KernelId,
    },
    MediaWalker {
        kernel: KernelId,
        params: WalkerParams,
    },
}

/// Ordered list of commands for one GPU engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuffer<R> {
    commands: Vec<Command<R>>,
}

impl<R> Default for CommandBuffer<R> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl<R> CommandBuffer<R> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, command: Command<R>) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command<R>] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Services of the GPU used by the VP8 encoder: memory, command submission, cross engine
/// synchronization and the state heap of the render engine.
pub trait StatelessVP8EncoderBackend {
    /// Opaque handle of a GPU visible buffer or surface.
    type Resource: Clone + Debug + PartialEq;

    /// Allocates a linear buffer of `size` bytes.
    fn allocate_buffer(
        &mut self,
        name: &'static str,
        size: usize,
    ) -> StatelessBackendResult<Self::Resource>;

    /// Allocates a 2D surface of `width` x `height` bytes.
    fn allocate_surface(
        &mut self,
        name: &'static str,
        width: u32,
        height: u32,
    ) -> StatelessBackendResult<Self::Resource>;

    fn free_resource(&mut self, resource: Self::Resource);

    /// Locks `resource`, copies `data` at `offset` and unlocks it.
    fn write_resource(
        &mut self,
        resource: &Self::Resource,
        offset: usize,
        data: &[u8],
    ) -> StatelessBackendResult<()>;

    /// Locks `resource`, copies `data.len()` bytes from `offset` and unlocks it.
    fn read_resource(
        &mut self,
        resource: &Self::Resource,
        offset: usize,
        data: &mut [u8],
    ) -> StatelessBackendResult<()>;

    /// Locks `resource`, sets `len` bytes from `offset` to `value` and unlocks it.
    fn fill_resource(
        &mut self,
        resource: &Self::Resource,
        offset: usize,
        len: usize,
        value: u8,
    ) -> StatelessBackendResult<()>;

    fn set_gpu_context(&mut self, ctx: GpuContext) -> StatelessBackendResult<()>;

    /// Makes `waiter` wait until the work previously submitted to `on` signals.
    fn engine_wait(&mut self, waiter: GpuContext, on: GpuContext) -> StatelessBackendResult<()>;

    /// Signals the sync object of `ctx` once its submitted work completes.
    fn engine_signal(&mut self, ctx: GpuContext) -> StatelessBackendResult<()>;

    fn set_perf_tag(&mut self, tag: PerfTag);

    /// Starts a new performance counter ID for the work submitted after this call.
    fn reset_perf_tag(&mut self);

    fn submit(
        &mut self,
        ctx: GpuContext,
        buffer: CommandBuffer<Self::Resource>,
    ) -> StatelessBackendResult<()>;

    /// Assigns state heap space for `kernel`: a curbe of `curbe_size` bytes and a binding table
    /// of `binding_table_count` entries.
    fn assign_kernel_space(
        &mut self,
        kernel: KernelId,
        curbe_size: usize,
        binding_table_count: usize,
    ) -> StatelessBackendResult<DshRegion<Self::Resource>>;

    /// Requests binding table space only, reusing the previously assigned heap region of
    /// `kernel`.
    fn request_binding_table(
        &mut self,
        kernel: KernelId,
        binding_table_count: usize,
    ) -> StatelessBackendResult<()>;

    /// Copies the curbe data of a kernel into its heap region.
    fn load_curbe(
        &mut self,
        region: &DshRegion<Self::Resource>,
        data: &[u8],
    ) -> StatelessBackendResult<()>;

    fn bind_surface(
        &mut self,
        kernel: KernelId,
        index: u32,
        binding: SurfaceBinding<Self::Resource>,
    ) -> StatelessBackendResult<()>;

    /// Marks the heap blocks of `kernel` as in use by the submitted work.
    fn submit_blocks(&mut self, kernel: KernelId) -> StatelessBackendResult<()>;

    fn update_global_cmd_buf_id(&mut self) -> StatelessBackendResult<()>;

    fn mmio(&self) -> MfxMmioRegisters;

    /// Writes an MFX VP8 encoder configuration command at `offset` in `buffer`, to be executed
    /// later through a batch buffer start.
    fn init_encoder_cfg(
        &mut self,
        buffer: &Self::Resource,
        offset: usize,
        params: &EncoderCfgParams,
    ) -> StatelessBackendResult<()>;
}
