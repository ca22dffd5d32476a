// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Wrappers dispatching the encoding kernels on the render engine.
//!
//! Every wrapper goes through the same steps for its kernel: state heap space is assigned, the
//! curbe is loaded (or the one prepared earlier in the frame is reused), the surfaces are bound
//! and the walker is submitted. [`KernelStates`] enforces that order.

use std::collections::HashMap;

use log::trace;

use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::resources::Vp8Resources;
use crate::encoder::stateless::Command;
use crate::encoder::stateless::CommandBuffer;
use crate::encoder::stateless::DshRegion;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::GpuContext;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::stateless::SurfaceBinding;
use crate::encoder::stateless::WalkerParams;
use crate::encoder::vp8::EncoderConfig;
use crate::encoder::vp8::ALT_REF_FLAG;
use crate::encoder::vp8::GOLDEN_REF_FLAG;
use crate::encoder::vp8::LAST_REF_FLAG;

pub mod brc;
pub mod mbenc;
pub mod me;
pub mod mpu;
pub mod scaling;
pub mod tpu;

/// Where a kernel stands in its dispatch for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchState {
    #[default]
    Idle,
    SpaceRequested,
    CurbeSet,
    CurbeReused,
    Bound,
    Submitted,
}

#[derive(Debug)]
struct KernelDispatch<R> {
    state: DispatchState,
    region: Option<DshRegion<R>>,
}

impl<R> Default for KernelDispatch<R> {
    fn default() -> Self {
        Self {
            state: Default::default(),
            region: None,
        }
    }
}

/// Dispatch state of every kernel, reused from frame to frame.
#[derive(Debug)]
pub struct KernelStates<R> {
    kernels: HashMap<KernelId, KernelDispatch<R>>,
}

impl<R> Default for KernelStates<R> {
    fn default() -> Self {
        Self {
            kernels: HashMap::new(),
        }
    }
}

impl<R: Clone> KernelStates<R> {
    pub fn state(&self, kernel: KernelId) -> DispatchState {
        self.kernels
            .get(&kernel)
            .map(|k| k.state)
            .unwrap_or_default()
    }

    pub fn region(&self, kernel: KernelId) -> EncodeResult<&DshRegion<R>> {
        self.kernels
            .get(&kernel)
            .and_then(|k| k.region.as_ref())
            .ok_or(EncodeError::NullInterface("kernel state"))
    }

    /// Brings every kernel back to idle for a new frame.
    pub fn start_frame(&mut self) {
        for kernel in self.kernels.values_mut() {
            kernel.state = DispatchState::Idle;
        }
    }

    fn transition(
        &mut self,
        kernel: KernelId,
        allowed: &[DispatchState],
        next: DispatchState,
    ) -> EncodeResult<&mut KernelDispatch<R>> {
        let dispatch = self.kernels.entry(kernel).or_default();
        if !allowed.contains(&dispatch.state) {
            log::error!(
                "{:?} kernel cannot go from {:?} to {:?}",
                kernel,
                dispatch.state,
                next
            );
            return Err(EncodeError::InvalidInternalState);
        }

        dispatch.state = next;
        Ok(dispatch)
    }

    /// Assigns state heap space for the curbe and binding table of `kernel`.
    pub fn assign_space<B, C>(
        &mut self,
        backend: &mut B,
        builder: &C,
        kernel: KernelId,
    ) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
        C: Vp8CurbeBuilder,
    {
        let layout = builder.kernel_layout(kernel);
        let dispatch = self.transition(
            kernel,
            &[DispatchState::Idle, DispatchState::Submitted],
            DispatchState::SpaceRequested,
        )?;

        let region =
            backend.assign_kernel_space(kernel, layout.curbe_size, layout.binding_table_count)?;
        dispatch.region = Some(region);

        trace!("{:?}: assigned {} bytes of curbe", kernel, layout.curbe_size);
        Ok(())
    }

    pub fn load_curbe<B>(&mut self, backend: &mut B, kernel: KernelId, data: &[u8]) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        let dispatch = self.transition(
            kernel,
            &[DispatchState::SpaceRequested],
            DispatchState::CurbeSet,
        )?;
        let region = dispatch
            .region
            .as_ref()
            .ok_or(EncodeError::NullInterface("kernel state"))?;

        backend.load_curbe(region, data)?;
        Ok(())
    }

    /// Lets `kernel` use the heap region, and thus the curbe, of `owner`.
    pub fn share_region(&mut self, owner: KernelId, kernel: KernelId) -> EncodeResult<()> {
        let region = self.region(owner)?.clone();
        let dispatch = self.transition(
            kernel,
            &[DispatchState::Idle, DispatchState::Submitted],
            DispatchState::CurbeSet,
        )?;
        dispatch.region = Some(region);

        Ok(())
    }

    /// Keeps the curbe loaded earlier in the frame and only requests a new binding table.
    pub fn reuse_curbe<B, C>(
        &mut self,
        backend: &mut B,
        builder: &C,
        kernel: KernelId,
    ) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
        C: Vp8CurbeBuilder,
    {
        self.transition(
            kernel,
            &[DispatchState::CurbeSet],
            DispatchState::CurbeReused,
        )?;

        backend.request_binding_table(kernel, builder.kernel_layout(kernel).binding_table_count)?;
        trace!("{:?}: reusing curbe", kernel);
        Ok(())
    }

    pub fn bind<B>(
        &mut self,
        backend: &mut B,
        kernel: KernelId,
        index: u32,
        binding: SurfaceBinding<R>,
    ) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        self.transition(
            kernel,
            &[
                DispatchState::CurbeSet,
                DispatchState::CurbeReused,
                DispatchState::Bound,
            ],
            DispatchState::Bound,
        )?;

        backend.bind_surface(kernel, index, binding)?;
        Ok(())
    }

    /// Closes the dispatch of `kernel`. `submit_blocks` is false when the heap blocks are owned
    /// by a kernel sharing them and were already submitted.
    pub fn finish<B>(&mut self, backend: &mut B, kernel: KernelId, submit_blocks: bool) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        self.transition(kernel, &[DispatchState::Bound], DispatchState::Submitted)?;

        if submit_blocks {
            backend.submit_blocks(kernel)?;
        }
        backend.update_global_cmd_buf_id()?;
        Ok(())
    }
}

/// Services and buffers shared by the kernel wrappers.
pub struct KernelEnv<'a, B: StatelessVP8EncoderBackend, C> {
    pub backend: &'a mut B,
    pub builder: &'a C,
    pub config: &'a EncoderConfig,
    pub resources: &'a Vp8Resources<B::Resource>,
    pub dispatch: &'a mut KernelStates<B::Resource>,
}

impl<'a, B, C> KernelEnv<'a, B, C>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    pub(crate) fn assign_and_load(&mut self, kernel: KernelId, curbe: &[u8]) -> EncodeResult<()> {
        self.dispatch.assign_space(self.backend, self.builder, kernel)?;
        self.dispatch.load_curbe(self.backend, kernel, curbe)
    }

    pub(crate) fn bind(
        &mut self,
        kernel: KernelId,
        index: u32,
        binding: SurfaceBinding<B::Resource>,
    ) -> EncodeResult<()> {
        self.dispatch.bind(self.backend, kernel, index, binding)
    }

    pub(crate) fn bind_buffer(
        &mut self,
        kernel: KernelId,
        index: u32,
        resource: &B::Resource,
        offset: u32,
        size: usize,
        writable: bool,
    ) -> EncodeResult<()> {
        self.bind(
            kernel,
            index,
            SurfaceBinding::Buffer {
                resource: resource.clone(),
                offset,
                size: size as u32,
                writable,
            },
        )
    }

    pub(crate) fn bind_2d(
        &mut self,
        kernel: KernelId,
        index: u32,
        resource: &B::Resource,
        writable: bool,
    ) -> EncodeResult<()> {
        self.bind(
            kernel,
            index,
            SurfaceBinding::Surface2d {
                resource: resource.clone(),
                writable,
            },
        )
    }

    pub(crate) fn bind_vme(
        &mut self,
        kernel: KernelId,
        index: u32,
        resource: &B::Resource,
    ) -> EncodeResult<()> {
        self.bind(
            kernel,
            index,
            SurfaceBinding::Vme {
                resource: resource.clone(),
            },
        )
    }

    /// Submits the kernel with a media walker or, without walker parameters, a single media
    /// object.
    pub(crate) fn submit(
        &mut self,
        kernel: KernelId,
        walker: Option<WalkerParams>,
        submit_blocks: bool,
    ) -> EncodeResult<()> {
        self.dispatch.finish(self.backend, kernel, submit_blocks)?;

        let mut cmd = CommandBuffer::new();
        cmd.push(match walker {
            Some(params) => Command::MediaWalker { kernel, params },
            None => Command::MediaObject { kernel },
        });
        cmd.push(Command::BatchBufferEnd);

        trace!("submitting {:?} kernel", kernel);
        self.backend.submit(GpuContext::Render, cmd)?;
        Ok(())
    }
}

/// Binding table slot of the last, golden and alt references. The references enabled by
/// `ref_frame_ctrl` take the slots in that order.
pub fn reference_slots(ref_frame_ctrl: u8) -> [Option<usize>; 3] {
    let mut slots = [None; 3];
    let mut next = 0;

    for (i, flag) in [LAST_REF_FLAG, GOLDEN_REF_FLAG, ALT_REF_FLAG]
        .into_iter()
        .enumerate()
    {
        if ref_frame_ctrl & flag != 0 {
            slots[i] = Some(next);
            next += 1;
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::Backend;
    use crate::encoder::stateless::vp8::gen9::Gen9CurbeBuilder;

    #[test]
    fn test_reference_slots() {
        assert_eq!(reference_slots(0), [None, None, None]);
        assert_eq!(reference_slots(1), [Some(0), None, None]);
        assert_eq!(reference_slots(2), [None, Some(0), None]);
        assert_eq!(reference_slots(3), [Some(0), Some(1), None]);
        assert_eq!(reference_slots(4), [None, None, Some(0)]);
        assert_eq!(reference_slots(5), [Some(0), None, Some(1)]);
        assert_eq!(reference_slots(6), [None, Some(0), Some(1)]);
        assert_eq!(reference_slots(7), [Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_dispatch_sequence() {
        let mut backend = Backend::default();
        let mut states = KernelStates::default();
        let kernel = KernelId::Mpu;

        assert_eq!(states.state(kernel), DispatchState::Idle);
        states
            .assign_space(&mut backend, &Gen9CurbeBuilder, kernel)
            .unwrap();
        assert_eq!(states.state(kernel), DispatchState::SpaceRequested);
        states.load_curbe(&mut backend, kernel, &[0; 16]).unwrap();
        assert_eq!(states.state(kernel), DispatchState::CurbeSet);
        states
            .bind(
                &mut backend,
                kernel,
                0,
                SurfaceBinding::Vme {
                    resource: Default::default(),
                },
            )
            .unwrap();
        states.finish(&mut backend, kernel, true).unwrap();
        assert_eq!(states.state(kernel), DispatchState::Submitted);

        // A submitted kernel can be dispatched again in the same frame.
        states
            .assign_space(&mut backend, &Gen9CurbeBuilder, kernel)
            .unwrap();

        states.start_frame();
        assert_eq!(states.state(kernel), DispatchState::Idle);
    }

    #[test]
    fn test_dispatch_cannot_skip_steps() {
        let mut backend = Backend::default();
        let mut states = KernelStates::default();

        assert!(matches!(
            states.load_curbe(&mut backend, KernelId::Tpu, &[0; 4]),
            Err(EncodeError::InvalidInternalState)
        ));
        assert!(matches!(
            states.finish(&mut backend, KernelId::Me, true),
            Err(EncodeError::InvalidInternalState)
        ));
        assert!(matches!(
            states.reuse_curbe(&mut backend, &Gen9CurbeBuilder, KernelId::Mpu),
            Err(EncodeError::InvalidInternalState)
        ));

        states
            .assign_space(&mut backend, &Gen9CurbeBuilder, KernelId::Me)
            .unwrap();
        assert!(matches!(
            states.assign_space(&mut backend, &Gen9CurbeBuilder, KernelId::Me),
            Err(EncodeError::InvalidInternalState)
        ));
    }

    #[test]
    fn test_shared_region() {
        let mut backend = Backend::default();
        let mut states = KernelStates::default();

        assert!(matches!(
            states.share_region(KernelId::MbEncILuma, KernelId::MbEncIChroma),
            Err(EncodeError::NullInterface(_))
        ));

        states
            .assign_space(&mut backend, &Gen9CurbeBuilder, KernelId::MbEncILuma)
            .unwrap();
        states
            .share_region(KernelId::MbEncILuma, KernelId::MbEncIChroma)
            .unwrap();

        assert_eq!(
            states.region(KernelId::MbEncILuma).unwrap(),
            states.region(KernelId::MbEncIChroma).unwrap()
        );
        assert_eq!(
            states.state(KernelId::MbEncIChroma),
            DispatchState::CurbeSet
        );
        states
            .reuse_curbe(&mut backend, &Gen9CurbeBuilder, KernelId::MbEncIChroma)
            .unwrap();
        assert_eq!(
            states.state(KernelId::MbEncIChroma),
            DispatchState::CurbeReused
        );
    }
}
