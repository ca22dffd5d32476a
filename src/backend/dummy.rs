// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! This file contains a dummy backend whose only purpose is to let the encoder
//! run so we can test it in isolation.
//!
//! Resources are plain byte vectors. Store commands of the submitted buffers are executed
//! against them, everything else is recorded for the tests to inspect.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::encoder::stateless::Command;
use crate::encoder::stateless::CommandBuffer;
use crate::encoder::stateless::DshRegion;
use crate::encoder::stateless::EncoderCfgParams;
use crate::encoder::stateless::GpuContext;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::MfxMmioRegisters;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessBackendError;
use crate::encoder::stateless::StatelessBackendResult;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::stateless::SurfaceBinding;

/// Handle of a dummy resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Handle(pub u32);

const HEAP: Handle = Handle(0);
const KERNELS: [KernelId; 11] = [
    KernelId::Scaling,
    KernelId::Me,
    KernelId::MbEncILuma,
    KernelId::MbEncIChroma,
    KernelId::MbEncP,
    KernelId::BrcIFrameDist,
    KernelId::BrcInit,
    KernelId::BrcReset,
    KernelId::BrcUpdate,
    KernelId::Mpu,
    KernelId::Tpu,
];
const CURBE_SLOT_SIZE: u32 = 512;

pub(crate) const MMIO: MfxMmioRegisters = MfxMmioRegisters {
    bitstream_byte_count: 0x12908,
    image_status_mask: 0x128b4,
    image_status_ctrl: 0x128b8,
    dq_index: 0x12910,
    d_loop_filter: 0x12914,
    cumulative_dq_index01: 0x12920,
    cumulative_dq_index23: 0x12924,
    cumulative_loop_filter01: 0x12928,
    cumulative_loop_filter23: 0x1292c,
    convergence_status: 0x12930,
};

struct Allocation {
    name: &'static str,
    data: Vec<u8>,
}

/// Cross engine synchronization and submission events, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EngineEvent {
    Wait { waiter: GpuContext, on: GpuContext },
    Signal(GpuContext),
    Submit(GpuContext),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncoderCfgCall {
    pub buffer: Handle,
    pub offset: usize,
    pub first_pass: bool,
    pub brc_enabled: bool,
    pub cfg_buffer_size: usize,
}

/// Dummy backend recording everything the encoder asks of the GPU.
pub(crate) struct Backend {
    next_id: u32,
    resources: HashMap<Handle, Allocation>,
    failing_allocations: HashSet<&'static str>,
    failing_locks: HashSet<&'static str>,
    registers: HashMap<u32, u32>,

    pub gpu_context: GpuContext,
    pub perf_tags: Vec<PerfTag>,
    /// Length of `perf_tags` at each performance counter reset.
    pub perf_tag_resets: Vec<usize>,
    pub events: Vec<EngineEvent>,
    pub submissions: Vec<(GpuContext, CommandBuffer<Handle>)>,
    pub bindings: Vec<(KernelId, u32, SurfaceBinding<Handle>)>,
    pub curbe_loads: Vec<KernelId>,
    pub binding_table_requests: Vec<KernelId>,
    pub submitted_blocks: Vec<KernelId>,
    pub encoder_cfgs: Vec<EncoderCfgCall>,
    pub global_cmd_buf_id: u32,
}

impl Default for Backend {
    fn default() -> Self {
        let mut resources = HashMap::new();
        resources.insert(
            HEAP,
            Allocation {
                name: "Dynamic state heap",
                data: vec![0; KERNELS.len() * CURBE_SLOT_SIZE as usize],
            },
        );

        Self {
            next_id: 1,
            resources,
            failing_allocations: Default::default(),
            failing_locks: Default::default(),
            registers: Default::default(),
            gpu_context: GpuContext::Render,
            perf_tags: Default::default(),
            perf_tag_resets: Default::default(),
            events: Default::default(),
            submissions: Default::default(),
            bindings: Default::default(),
            curbe_loads: Default::default(),
            binding_table_requests: Default::default(),
            submitted_blocks: Default::default(),
            encoder_cfgs: Default::default(),
            global_cmd_buf_id: 0,
        }
    }
}

impl Backend {
    /// Makes every following allocation named `name` fail.
    pub(crate) fn fail_allocation_of(&mut self, name: &'static str) {
        self.failing_allocations.insert(name);
    }

    /// Makes every following lock of the resources named `name` fail.
    pub(crate) fn fail_lock_of(&mut self, name: &'static str) {
        self.failing_locks.insert(name);
    }

    /// Value returned by the MMIO register at `register` when a store command reads it.
    pub(crate) fn set_register(&mut self, register: u32, value: u32) {
        self.registers.insert(register, value);
    }

    pub(crate) fn resource_size(&self, resource: &Handle) -> Option<usize> {
        self.resources.get(resource).map(|a| a.data.len())
    }

    pub(crate) fn resource_name(&self, resource: &Handle) -> Option<&'static str> {
        self.resources.get(resource).map(|a| a.name)
    }

    pub(crate) fn resource_data(&self, resource: &Handle) -> Vec<u8> {
        self.resources
            .get(resource)
            .map(|a| a.data.clone())
            .unwrap_or_default()
    }

    /// Number of allocated resources, the state heap excluded.
    pub(crate) fn num_live_resources(&self) -> usize {
        self.resources.len() - 1
    }

    /// Curbe currently loaded in the state heap slot of `kernel`.
    pub(crate) fn curbe_data(&self, kernel: KernelId, size: usize) -> Vec<u8> {
        let offset = Self::curbe_offset(kernel) as usize;
        self.resource_data(&HEAP)[offset..offset + size].to_vec()
    }

    /// Commands submitted to `ctx`, in submission order.
    pub(crate) fn submitted_to(&self, ctx: GpuContext) -> Vec<&CommandBuffer<Handle>> {
        self.submissions
            .iter()
            .filter(|(c, _)| *c == ctx)
            .map(|(_, cmd)| cmd)
            .collect()
    }

    fn curbe_offset(kernel: KernelId) -> u32 {
        let slot = KERNELS.iter().position(|k| *k == kernel).unwrap_or(0);
        slot as u32 * CURBE_SLOT_SIZE
    }

    fn lock(&mut self, resource: &Handle) -> StatelessBackendResult<&mut Vec<u8>> {
        let allocation = self
            .resources
            .get_mut(resource)
            .ok_or(StatelessBackendError::InvalidResource)?;
        if self.failing_locks.contains(allocation.name) {
            return Err(StatelessBackendError::LockFailed(allocation.name));
        }

        Ok(&mut allocation.data)
    }

    fn allocate(&mut self, name: &'static str, size: usize) -> StatelessBackendResult<Handle> {
        if self.failing_allocations.contains(name) {
            return Err(StatelessBackendError::OutOfResources);
        }

        let handle = Handle(self.next_id);
        self.next_id += 1;
        self.resources.insert(
            handle,
            Allocation {
                name,
                data: vec![0; size],
            },
        );

        Ok(handle)
    }

    fn store(&mut self, buffer: &Handle, offset: u32, value: u32) -> StatelessBackendResult<()> {
        self.write_resource(buffer, offset as usize, &value.to_le_bytes())
    }

    fn execute(&mut self, cmd: &CommandBuffer<Handle>) -> StatelessBackendResult<()> {
        for command in cmd.commands() {
            match command {
                Command::StoreDataImm {
                    buffer,
                    offset,
                    value,
                } => self.store(buffer, *offset, *value)?,
                Command::StoreRegisterMem {
                    register,
                    buffer,
                    offset,
                } => {
                    let value = self.registers.get(register).copied().unwrap_or(0);
                    self.store(buffer, *offset, value)?;
                }
                _ => (),
            }
        }

        Ok(())
    }
}

impl StatelessVP8EncoderBackend for Backend {
    type Resource = Handle;

    fn allocate_buffer(
        &mut self,
        name: &'static str,
        size: usize,
    ) -> StatelessBackendResult<Self::Resource> {
        self.allocate(name, size)
    }

    fn allocate_surface(
        &mut self,
        name: &'static str,
        width: u32,
        height: u32,
    ) -> StatelessBackendResult<Self::Resource> {
        self.allocate(name, (width * height) as usize)
    }

    fn free_resource(&mut self, resource: Self::Resource) {
        if resource != HEAP {
            self.resources.remove(&resource);
        }
    }

    fn write_resource(
        &mut self,
        resource: &Self::Resource,
        offset: usize,
        data: &[u8],
    ) -> StatelessBackendResult<()> {
        let dst = self.lock(resource)?;
        let dst = dst
            .get_mut(offset..offset + data.len())
            .ok_or(StatelessBackendError::InvalidResource)?;
        dst.copy_from_slice(data);
        Ok(())
    }

    fn read_resource(
        &mut self,
        resource: &Self::Resource,
        offset: usize,
        data: &mut [u8],
    ) -> StatelessBackendResult<()> {
        let len = data.len();
        let src = self.lock(resource)?;
        let src = src
            .get(offset..offset + len)
            .ok_or(StatelessBackendError::InvalidResource)?;
        data.copy_from_slice(src);
        Ok(())
    }

    fn fill_resource(
        &mut self,
        resource: &Self::Resource,
        offset: usize,
        len: usize,
        value: u8,
    ) -> StatelessBackendResult<()> {
        let dst = self.lock(resource)?;
        let dst = dst
            .get_mut(offset..offset + len)
            .ok_or(StatelessBackendError::InvalidResource)?;
        dst.fill(value);
        Ok(())
    }

    fn set_gpu_context(&mut self, ctx: GpuContext) -> StatelessBackendResult<()> {
        self.gpu_context = ctx;
        Ok(())
    }

    fn engine_wait(&mut self, waiter: GpuContext, on: GpuContext) -> StatelessBackendResult<()> {
        self.events.push(EngineEvent::Wait { waiter, on });
        Ok(())
    }

    fn engine_signal(&mut self, ctx: GpuContext) -> StatelessBackendResult<()> {
        self.events.push(EngineEvent::Signal(ctx));
        Ok(())
    }

    fn set_perf_tag(&mut self, tag: PerfTag) {
        self.perf_tags.push(tag);
    }

    fn reset_perf_tag(&mut self) {
        self.perf_tag_resets.push(self.perf_tags.len());
    }

    fn submit(
        &mut self,
        ctx: GpuContext,
        buffer: CommandBuffer<Self::Resource>,
    ) -> StatelessBackendResult<()> {
        self.execute(&buffer)?;
        self.events.push(EngineEvent::Submit(ctx));
        self.submissions.push((ctx, buffer));
        Ok(())
    }

    fn assign_kernel_space(
        &mut self,
        kernel: KernelId,
        curbe_size: usize,
        _binding_table_count: usize,
    ) -> StatelessBackendResult<DshRegion<Self::Resource>> {
        if curbe_size > CURBE_SLOT_SIZE as usize {
            return Err(StatelessBackendError::OutOfResources);
        }

        Ok(DshRegion {
            heap: HEAP,
            curbe_offset: Self::curbe_offset(kernel),
            curbe_size: curbe_size as u32,
        })
    }

    fn request_binding_table(
        &mut self,
        kernel: KernelId,
        _binding_table_count: usize,
    ) -> StatelessBackendResult<()> {
        self.binding_table_requests.push(kernel);
        Ok(())
    }

    fn load_curbe(
        &mut self,
        region: &DshRegion<Self::Resource>,
        data: &[u8],
    ) -> StatelessBackendResult<()> {
        if data.len() > region.curbe_size as usize {
            return Err(StatelessBackendError::InvalidResource);
        }

        let slot = (region.curbe_offset / CURBE_SLOT_SIZE) as usize;
        let kernel = KERNELS
            .get(slot)
            .copied()
            .ok_or(StatelessBackendError::InvalidResource)?;
        self.write_resource(&region.heap, region.curbe_offset as usize, data)?;
        self.curbe_loads.push(kernel);
        Ok(())
    }

    fn bind_surface(
        &mut self,
        kernel: KernelId,
        index: u32,
        binding: SurfaceBinding<Self::Resource>,
    ) -> StatelessBackendResult<()> {
        self.bindings.push((kernel, index, binding));
        Ok(())
    }

    fn submit_blocks(&mut self, kernel: KernelId) -> StatelessBackendResult<()> {
        self.submitted_blocks.push(kernel);
        Ok(())
    }

    fn update_global_cmd_buf_id(&mut self) -> StatelessBackendResult<()> {
        self.global_cmd_buf_id += 1;
        Ok(())
    }

    fn mmio(&self) -> MfxMmioRegisters {
        MMIO
    }

    fn init_encoder_cfg(
        &mut self,
        buffer: &Self::Resource,
        offset: usize,
        params: &EncoderCfgParams,
    ) -> StatelessBackendResult<()> {
        let size = self
            .resource_size(buffer)
            .ok_or(StatelessBackendError::InvalidResource)?;
        if offset >= size || params.cfg_buffer_size > size {
            return Err(StatelessBackendError::OutOfResources);
        }

        self.encoder_cfgs.push(EncoderCfgCall {
            buffer: *buffer,
            offset,
            first_pass: params.first_pass,
            brc_enabled: params.brc_enabled,
            cfg_buffer_size: params.cfg_buffer_size,
        });
        Ok(())
    }
}
