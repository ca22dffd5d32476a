// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Dual-pipe VP8 encoder.
//!
//! Every frame goes through the same calls, in this order:
//!
//! 1. [`Vp8Encoder::initialize_picture`] translates the client parameters into the per-frame
//!    decisions of the [`PictureContext`].
//! 2. [`Vp8Encoder::execute_kernel_functions`] dispatches the encoding kernels on the render
//!    engine.
//! 3. [`Vp8Encoder::execute_picture_level`] and [`Vp8Encoder::execute_slice_level`] record and
//!    submit every PAK pass on the video engine.
//! 4. [`Vp8Encoder::get_status_report`] reads back the outcome of the frame.
//!
//! [`Vp8Encoder::encode_frame`] runs the first three steps.

use log::debug;
use log::trace;

use crate::encoder::stateless::vp8::curbe::CurbeFreshness;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::gen9::Gen9CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::brc;
use crate::encoder::stateless::vp8::kernels::brc::BrcState;
use crate::encoder::stateless::vp8::kernels::mbenc;
use crate::encoder::stateless::vp8::kernels::mbenc::MbEncPhase;
use crate::encoder::stateless::vp8::kernels::me;
use crate::encoder::stateless::vp8::kernels::mpu;
use crate::encoder::stateless::vp8::kernels::scaling;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::kernels::KernelStates;
use crate::encoder::stateless::vp8::params::average_qp;
use crate::encoder::stateless::vp8::params::collapse_ref_frame_ctrl;
use crate::encoder::stateless::vp8::params::frame_position_in_gop;
use crate::encoder::stateless::vp8::params::gop_is_idr_frame_only;
use crate::encoder::stateless::vp8::params::kernel_mode_for;
use crate::encoder::stateless::vp8::params::log_policy;
use crate::encoder::stateless::vp8::params::num_brc_pak_passes;
use crate::encoder::stateless::vp8::params::pass_policy;
use crate::encoder::stateless::vp8::params::reference_pictures;
use crate::encoder::stateless::vp8::params::PassPolicy;
use crate::encoder::stateless::vp8::params::PassPolicyInput;
use crate::encoder::stateless::vp8::params::SequenceGeometry;
use crate::encoder::stateless::vp8::resources::Vp8Resources;
use crate::encoder::stateless::vp8::resources::BRC_PAK_STATISTICS_SIZE;
use crate::encoder::stateless::vp8::status::record_offset;
use crate::encoder::stateless::vp8::status::EncodeStatusRecord;
use crate::encoder::stateless::vp8::status::Vp8StatusReport;
use crate::encoder::stateless::vp8::status::STATUS_RECORD_SIZE;
use crate::encoder::stateless::CommandBuffer;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::GpuContext;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::vp8::EncoderConfig;
use crate::encoder::vp8::PictureId;
use crate::encoder::vp8::PictureParameters;
use crate::encoder::vp8::QuantData;
use crate::encoder::vp8::SequenceParameters;
use crate::encoder::vp8::NUM_PICTURE_IDS;
use crate::encoder::CodecFunction;
use crate::encoder::FrameType;
use crate::encoder::KernelMode;

pub mod curbe;
pub mod gen9;
pub mod kernels;
pub mod pak;
pub mod params;
pub mod resources;
pub mod status;
mod tables;

/// Surfaces of a picture the encoder may reference later.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry<R> {
    pub raw: R,
    pub recon: R,
    /// Downscaled copies owned by the encoder, created by the scaling kernel.
    pub scaled_4x: Option<R>,
    pub scaled_16x: Option<R>,
    /// Always true for VP8 once the entry is populated.
    pub used_as_ref: bool,
}

impl<R> ReferenceEntry<R> {
    /// Surface the kernels search in: the source picture when `use_raw` is set, the
    /// reconstructed one otherwise.
    pub fn effective(&self, use_raw: bool) -> &R {
        if use_raw {
            &self.raw
        } else {
            &self.recon
        }
    }
}

/// Pictures known to the encoder, indexed by [`PictureId`].
#[derive(Debug)]
pub struct ReferenceList<R> {
    entries: Vec<Option<ReferenceEntry<R>>>,
}

impl<R> Default for ReferenceList<R> {
    fn default() -> Self {
        Self {
            entries: (0..NUM_PICTURE_IDS).map(|_| None).collect(),
        }
    }
}

impl<R> ReferenceList<R> {
    pub fn get(&self, id: PictureId) -> EncodeResult<&ReferenceEntry<R>> {
        self.entries
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(EncodeError::NullInterface("reference picture"))
    }

    pub fn get_mut(&mut self, id: PictureId) -> EncodeResult<&mut ReferenceEntry<R>> {
        self.entries
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(EncodeError::NullInterface("reference picture"))
    }

    /// Points the entry of `id` at new surfaces. Downscaled surfaces of a previous picture
    /// with the same index are kept for reuse.
    pub fn insert(&mut self, id: PictureId, raw: R, recon: R) -> EncodeResult<()> {
        let slot = self
            .entries
            .get_mut(id.index())
            .ok_or(EncodeError::InvalidParameter("reconstructed picture index"))?;

        match slot {
            Some(entry) => {
                entry.raw = raw;
                entry.recon = recon;
                entry.used_as_ref = true;
            }
            None => {
                *slot = Some(ReferenceEntry {
                    raw,
                    recon,
                    scaled_4x: None,
                    scaled_16x: None,
                    used_as_ref: true,
                })
            }
        }

        Ok(())
    }

    /// Releases the downscaled surfaces of every entry.
    pub fn free_scaled<B>(&mut self, backend: &mut B)
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        for entry in self.entries.iter_mut().flatten() {
            for surface in [entry.scaled_4x.take(), entry.scaled_16x.take()]
                .into_iter()
                .flatten()
            {
                backend.free_resource(surface);
            }
        }
    }
}

/// State of the current sequence, carried from frame to frame.
#[derive(Debug, Clone)]
pub struct SequenceContext {
    pub parameters: SequenceParameters,
    pub geometry: SequenceGeometry,
    pub kernel_mode: KernelMode,
    /// 16x motion estimation is possible for the inter frames of the sequence.
    pub me_16x_allowed: bool,
    pub gop_is_idr_frame_only: bool,
    pub brc_enabled: bool,
    /// Set until the first frame of the session ran its kernels.
    pub brc_init: bool,
    pub brc: BrcState,
    pub average_key_frame_qp: u8,
    pub average_p_frame_qp: u8,
    pub frame_num: u32,
    pub previous_frame_type: Option<FrameType>,
}

/// Decisions and buffers of the frame being encoded.
#[derive(Debug)]
pub struct PictureContext<R> {
    pub parameters: PictureParameters,
    pub quant: QuantData,
    pub frame_type: FrameType,
    /// Reference control mask after collapsing aliased references.
    pub ref_frame_ctrl: u8,
    pub hme_enabled: bool,
    pub me_16x_enabled: bool,
    pub me_16x_done: bool,
    pub frame_position_in_gop: u32,
    pub policy: PassPolicy,
    /// PAK passes run by the bitrate control, 1 without multi-pass bitrate control.
    pub brc_num_pak_passes: u8,
    /// Identifies the frame in the status buffer.
    pub store_data: u32,
    pub raw_surface: R,
    pub recon_surface: R,
    pub coded_buffer: R,
    pub segment_map: Option<R>,
    pub mbenc_curbe: CurbeFreshness,
    pub mpu_curbe: CurbeFreshness,
    pub tpu_curbe: CurbeFreshness,
    /// The encoder configuration commands were written by the BRC update kernel.
    pub encoder_cfg_initialized: bool,
    /// The BRC distortion surface has to be cleared before a kernel accumulates into it.
    pub init_brc_distortion: bool,
    pub used_as_ref: bool,
    /// The video engine signals the render engine after its passes.
    pub signal_enc: bool,
}

#[derive(Debug)]
pub struct PassContext<R> {
    pub current_pass: u8,
    /// Video commands kept open across bitrate control passes.
    pub video_cmd: Option<CommandBuffer<R>>,
}

impl<R> Default for PassContext<R> {
    fn default() -> Self {
        Self {
            current_pass: 0,
            video_cmd: None,
        }
    }
}

/// Everything the kernel wrappers and the PAK executor work on.
#[derive(Debug)]
pub struct EncodeContext<R> {
    pub sequence: SequenceContext,
    pub picture: PictureContext<R>,
    pub pass: PassContext<R>,
    pub references: ReferenceList<R>,
}

/// Client input of one frame.
pub struct PictureInput<R> {
    /// New sequence parameters, mandatory for the first frame.
    pub sequence: Option<SequenceParameters>,
    pub picture: PictureParameters,
    pub quant: QuantData,
    pub raw_surface: R,
    /// Mandatory unless the encoder only runs the kernels.
    pub recon_surface: Option<R>,
    pub coded_buffer: R,
    pub segment_map: Option<R>,
}

pub struct Vp8Encoder<B: StatelessVP8EncoderBackend, C> {
    backend: B,
    builder: C,
    config: EncoderConfig,
    geometry: SequenceGeometry,
    resources: Option<Vp8Resources<B::Resource>>,
    dispatch: KernelStates<B::Resource>,
    ctx: Option<EncodeContext<B::Resource>>,
    next_store_data: u32,
}

pub type Gen9Vp8Encoder<B> = Vp8Encoder<B, Gen9CurbeBuilder>;

impl<B> Vp8Encoder<B, Gen9CurbeBuilder>
where
    B: StatelessVP8EncoderBackend,
{
    pub fn new_gen9(backend: B, config: EncoderConfig) -> EncodeResult<Self> {
        Self::new(backend, Gen9CurbeBuilder, config)
    }
}

impl<B, C> Vp8Encoder<B, C>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    pub fn new(backend: B, builder: C, mut config: EncoderConfig) -> EncodeResult<Self> {
        if config.codec_function == CodecFunction::Pak {
            return Err(EncodeError::Unsupported);
        }

        config.me_16x_supported &= config.hme_supported;
        let geometry = SequenceGeometry::new(config.resolution);

        Ok(Self {
            backend,
            builder,
            config,
            geometry,
            resources: None,
            dispatch: Default::default(),
            ctx: None,
            next_store_data: 1,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn resources(&self) -> Option<&Vp8Resources<B::Resource>> {
        self.resources.as_ref()
    }

    pub fn context(&self) -> Option<&EncodeContext<B::Resource>> {
        self.ctx.as_ref()
    }

    /// Allocates the resources of the current resolution, if not done already.
    pub fn allocate_resources(&mut self) -> EncodeResult<()> {
        if self.resources.is_none() {
            self.resources = Some(Vp8Resources::allocate(
                &mut self.backend,
                &self.builder,
                &self.config,
                &self.geometry,
            )?);
        }

        Ok(())
    }

    pub fn free_resources(&mut self) {
        if let Some(resources) = self.resources.take() {
            resources.free(&mut self.backend);
        }
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.references.free_scaled(&mut self.backend);
        }
    }

    fn set_sequence(&mut self, parameters: SequenceParameters) -> EncodeResult<SequenceContext> {
        let geometry = SequenceGeometry::new(parameters.resolution());
        if geometry != self.geometry {
            debug!(
                "resolution changed to {}x{}",
                geometry.frame_width, geometry.frame_height
            );
            self.free_resources();
            self.geometry = geometry;
            self.allocate_resources()?;
        }

        let (kernel_mode, me_16x_allowed) =
            kernel_mode_for(parameters.target_usage, self.config.me_16x_supported);
        let previous = self.ctx.as_ref().map(|ctx| &ctx.sequence);

        Ok(SequenceContext {
            geometry,
            kernel_mode,
            me_16x_allowed,
            gop_is_idr_frame_only: gop_is_idr_frame_only(parameters.gop_pic_size),
            brc_enabled: parameters.rate_control_method.is_brc(),
            brc_init: previous.map_or(true, |s| s.brc_init),
            brc: previous.map(|s| s.brc).unwrap_or_default(),
            average_key_frame_qp: previous.map_or(0, |s| s.average_key_frame_qp),
            average_p_frame_qp: previous.map_or(0, |s| s.average_p_frame_qp),
            frame_num: previous.map_or(0, |s| s.frame_num),
            previous_frame_type: previous.and_then(|s| s.previous_frame_type),
            parameters,
        })
    }

    /// Takes the parameters of a new frame and decides how it is encoded.
    pub fn initialize_picture(&mut self, input: PictureInput<B::Resource>) -> EncodeResult<()> {
        if self.resources.is_none() {
            return Err(EncodeError::NullInterface("encoder resources"));
        }

        let mut sequence = match input.sequence {
            Some(parameters) => self.set_sequence(parameters)?,
            None => self
                .ctx
                .as_ref()
                .map(|ctx| ctx.sequence.clone())
                .ok_or(EncodeError::NullInterface("sequence parameters"))?,
        };

        let config = &self.config;
        let parameters = input.picture;
        let frame_type = parameters.frame_type;
        let store_data = self.next_store_data;

        let recon_surface = match (input.recon_surface, config.codec_function) {
            (Some(recon), _) => recon,
            (None, CodecFunction::Enc) => input.raw_surface.clone(),
            (None, _) => return Err(EncodeError::InvalidParameter("reconstructed surface")),
        };

        if frame_type == FrameType::Inter {
            let references = self
                .ctx
                .as_ref()
                .map(|ctx| &ctx.references)
                .ok_or(EncodeError::NullInterface("reference picture"))?;
            for id in reference_pictures(&parameters) {
                references.get(id)?;
            }
        }
        if !parameters.curr_reconstructed_pic.is_valid() {
            return Err(EncodeError::InvalidParameter("reconstructed picture index"));
        }

        let ref_frame_ctrl = collapse_ref_frame_ctrl(frame_type, &parameters);
        debug!(
            "reference control {:#x} collapsed to {:#x}",
            parameters.ref_frame_ctrl, ref_frame_ctrl
        );

        let inter = frame_type == FrameType::Inter;
        let hme_enabled = config.hme_supported && inter && ref_frame_ctrl != 0;
        let me_16x_enabled = sequence.me_16x_allowed && inter;

        let rate_control_method = sequence.parameters.rate_control_method;
        let frame_position_in_gop = if inter {
            frame_position_in_gop(store_data, sequence.parameters.gop_pic_size, rate_control_method)?
        } else {
            0
        };

        let qp = average_qp(&input.quant, parameters.segmentation_enabled);
        match frame_type {
            FrameType::Intra => sequence.average_key_frame_qp = qp,
            FrameType::Inter => sequence.average_p_frame_qp = qp,
        }

        let multipass_brc = sequence.brc_enabled && config.multipass_brc_supported;
        let brc_num_pak_passes = if multipass_brc {
            num_brc_pak_passes(config.brc_precision)
        } else {
            1
        };

        let mut policy = pass_policy(&PassPolicyInput {
            kernel_mode: sequence.kernel_mode,
            repak_supported: config.repak_supported,
            multipass_brc_passes: multipass_brc.then_some(brc_num_pak_passes),
            frame_position_in_gop,
            store_data,
        });
        if store_data == 1 || config.codec_function == CodecFunction::Enc {
            policy.wait_for_pak = false;
        }
        log_policy(frame_type, sequence.kernel_mode, &policy);

        let init_brc_distortion = sequence.brc_enabled
            && (frame_type == FrameType::Intra
                || sequence.previous_frame_type == Some(FrameType::Intra));
        sequence.previous_frame_type = Some(frame_type);

        let picture = PictureContext {
            quant: input.quant,
            frame_type,
            ref_frame_ctrl,
            hme_enabled,
            me_16x_enabled,
            me_16x_done: false,
            frame_position_in_gop,
            policy,
            brc_num_pak_passes,
            store_data,
            raw_surface: input.raw_surface,
            recon_surface,
            coded_buffer: input.coded_buffer,
            segment_map: input.segment_map,
            mbenc_curbe: CurbeFreshness::Stale,
            mpu_curbe: CurbeFreshness::Stale,
            tpu_curbe: CurbeFreshness::Stale,
            encoder_cfg_initialized: false,
            init_brc_distortion,
            used_as_ref: true,
            signal_enc: config.codec_function != CodecFunction::Enc,
            parameters,
        };

        let mut references = match self.ctx.take() {
            Some(ctx) => ctx.references,
            None => Default::default(),
        };
        references.insert(
            picture.parameters.curr_reconstructed_pic,
            picture.raw_surface.clone(),
            picture.recon_surface.clone(),
        )?;

        self.dispatch.start_frame();
        self.next_store_data = store_data.wrapping_add(1).max(1);
        self.ctx = Some(EncodeContext {
            sequence,
            picture,
            pass: Default::default(),
            references,
        });

        trace!("frame {} initialized", store_data);
        Ok(())
    }

    fn parts(&mut self) -> EncodeResult<(KernelEnv<'_, B, C>, &mut EncodeContext<B::Resource>)> {
        let resources = self
            .resources
            .as_ref()
            .ok_or(EncodeError::NullInterface("encoder resources"))?;
        let ctx = self
            .ctx
            .as_mut()
            .ok_or(EncodeError::NullInterface("picture parameters"))?;

        Ok((
            KernelEnv {
                backend: &mut self.backend,
                builder: &self.builder,
                config: &self.config,
                resources,
                dispatch: &mut self.dispatch,
            },
            ctx,
        ))
    }

    /// Dispatches the encoding kernels of the frame on the render engine.
    pub fn execute_kernel_functions(&mut self) -> EncodeResult<()> {
        if !self.config.codec_function.enc_enabled() {
            return Err(EncodeError::Unsupported);
        }

        let (mut env, ctx) = self.parts()?;
        let frame_type = ctx.picture.frame_type;
        let brc_enabled = ctx.sequence.brc_enabled;

        env.backend.set_gpu_context(GpuContext::Render)?;

        if ctx.picture.policy.wait_for_pak {
            trace!("waiting for the PAK of the previous frame");
            env.backend
                .engine_wait(GpuContext::Render, GpuContext::Video)?;
        }

        if brc_enabled && (ctx.sequence.brc_init || ctx.sequence.parameters.reset_brc) {
            brc::run_init_reset(&mut env, ctx)?;
        }

        // Every picture may become a reference of a 16x search.
        scaling::run(&mut env, ctx, false)?;
        if ctx.sequence.me_16x_allowed {
            scaling::run(&mut env, ctx, true)?;
        }

        if ctx.picture.hme_enabled {
            if ctx.picture.me_16x_enabled {
                me::run(&mut env, ctx)?;
            }
            me::run(&mut env, ctx)?;
        }

        if brc_enabled {
            if frame_type.is_intra()
                && env.config.brc_distortion_buffer_supported
                && env.resources.brc.distortion.is_some()
            {
                mbenc::run(&mut env, ctx, MbEncPhase::IFrameDistortion)?;
            }
            brc::run_update(&mut env, ctx)?;
            env.backend.reset_perf_tag();
        }

        ctx.sequence.brc_init = false;

        let phase1_ran = !(frame_type.is_intra() && ctx.sequence.kernel_mode == KernelMode::Performance);
        if phase1_ran {
            mbenc::run(&mut env, ctx, MbEncPhase::Phase1)?;
        }
        if frame_type.is_intra() {
            mbenc::run(&mut env, ctx, MbEncPhase::Phase2 { phase1_ran })?;
        }

        mpu::run(&mut env, ctx)?;

        env.backend.engine_signal(GpuContext::Render)?;

        // The TPU curbe stays in use until the kernel runs after the PAK.
        ctx.picture.mbenc_curbe = CurbeFreshness::Stale;
        ctx.picture.mpu_curbe = CurbeFreshness::Stale;
        ctx.sequence.frame_num += 1;

        Ok(())
    }

    /// Number of PAK passes of the current frame.
    pub fn num_pak_passes(&self) -> Option<u8> {
        self.ctx
            .as_ref()
            .map(|ctx| ctx.picture.policy.num_passes + 1)
    }

    /// Records the picture level commands of PAK pass `pass`.
    pub fn execute_picture_level(&mut self, pass: u8) -> EncodeResult<()> {
        let (mut env, ctx) = self.parts()?;
        if pass > ctx.picture.policy.num_passes {
            return Err(EncodeError::InvalidParameter("PAK pass"));
        }

        ctx.pass.current_pass = pass;
        pak::execute_picture_level(&mut env, ctx)
    }

    /// Completes the pass started by [`Self::execute_picture_level`].
    pub fn execute_slice_level(&mut self) -> EncodeResult<()> {
        let (mut env, ctx) = self.parts()?;
        pak::execute_slice_level(&mut env, ctx)
    }

    /// Runs every step of the encoding of a frame.
    pub fn encode_frame(&mut self, input: PictureInput<B::Resource>) -> EncodeResult<()> {
        self.initialize_picture(input)?;

        if self.config.codec_function.enc_enabled() {
            self.execute_kernel_functions()?;
        }

        if self.config.codec_function.pak_enabled() {
            let num_passes = self.num_pak_passes().unwrap_or(1);
            for pass in 0..num_passes {
                self.execute_picture_level(pass)?;
                self.execute_slice_level()?;
            }
        }

        Ok(())
    }

    /// Reads the status of the last frame back from the status and PAK statistics buffers.
    pub fn get_status_report(&mut self) -> EncodeResult<Vp8StatusReport> {
        let resources = self
            .resources
            .as_ref()
            .ok_or(EncodeError::NullInterface("encoder resources"))?;
        let store_data = self
            .ctx
            .as_ref()
            .ok_or(EncodeError::NullInterface("encoded frame"))?
            .picture
            .store_data;

        let mut record = vec![0u8; STATUS_RECORD_SIZE];
        self.backend.read_resource(
            &resources.status,
            record_offset(store_data) as usize,
            &mut record,
        )?;
        let mut pak_statistics = vec![0u8; BRC_PAK_STATISTICS_SIZE];
        self.backend
            .read_resource(&resources.brc.pak_statistics, 0, &mut pak_statistics)?;

        let record = EncodeStatusRecord::parse(&record)?;
        Vp8StatusReport::new(&record, &pak_statistics, store_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::Backend;
    use crate::backend::dummy::EngineEvent;
    use crate::backend::dummy::Handle;
    use crate::backend::dummy::MMIO;
    use crate::encoder::stateless::vp8::pak::PictureStateEndShim;
    use crate::encoder::stateless::vp8::status::CodecStatus;
    use crate::encoder::stateless::Command;
    use crate::encoder::stateless::KernelId;
    use crate::encoder::stateless::PerfTag;
    use crate::encoder::stateless::SkipPredicate;
    use crate::encoder::stateless::SurfaceBinding;
    use crate::encoder::RateControlMethod;
    use crate::utils::read_dword;

    fn new_encoder(config: EncoderConfig) -> Gen9Vp8Encoder<Backend> {
        let _ = env_logger::try_init();

        let mut encoder = Vp8Encoder::new_gen9(Backend::default(), config).unwrap();
        encoder.allocate_resources().unwrap();
        encoder
    }

    fn cbr_sequence() -> SequenceParameters {
        SequenceParameters {
            rate_control_method: RateControlMethod::Cbr,
            target_bit_rate: [2000, 0, 0, 0],
            ..Default::default()
        }
    }

    fn key_frame(id: u8) -> PictureParameters {
        PictureParameters {
            curr_original_pic: PictureId(id),
            curr_reconstructed_pic: PictureId(id),
            status_report_feedback_number: u32::from(id) + 100,
            ..Default::default()
        }
    }

    fn inter_frame(id: u8, last: u8, golden: u8, alt: u8) -> PictureParameters {
        PictureParameters {
            frame_type: FrameType::Inter,
            last_ref_pic: PictureId(last),
            golden_ref_pic: PictureId(golden),
            alt_ref_pic: PictureId(alt),
            ref_frame_ctrl: 0x7,
            ..key_frame(id)
        }
    }

    fn input(
        encoder: &mut Gen9Vp8Encoder<Backend>,
        sequence: Option<SequenceParameters>,
        picture: PictureParameters,
    ) -> PictureInput<Handle> {
        let backend = encoder.backend_mut();
        PictureInput {
            sequence,
            picture,
            quant: QuantData {
                q_index: [40; 4],
                ..Default::default()
            },
            raw_surface: backend.allocate_surface("Raw", 320, 360).unwrap(),
            recon_surface: Some(backend.allocate_surface("Recon", 320, 360).unwrap()),
            coded_buffer: backend.allocate_buffer("Coded", 0x10000).unwrap(),
            segment_map: None,
        }
    }

    fn encode(
        encoder: &mut Gen9Vp8Encoder<Backend>,
        sequence: Option<SequenceParameters>,
        picture: PictureParameters,
    ) -> EncodeResult<()> {
        let input = input(encoder, sequence, picture);
        encoder.encode_frame(input)
    }

    fn count<T: PartialEq>(items: &[T], item: T) -> usize {
        items.iter().filter(|i| **i == item).count()
    }

    #[test]
    fn test_pak_only_is_unsupported() {
        let config = EncoderConfig {
            codec_function: CodecFunction::Pak,
            ..Default::default()
        };
        assert!(matches!(
            Vp8Encoder::new_gen9(Backend::default(), config),
            Err(EncodeError::Unsupported)
        ));
    }

    #[test]
    fn test_resources_required() {
        let mut encoder = Vp8Encoder::new_gen9(Backend::default(), Default::default()).unwrap();
        let input = input(&mut encoder, Some(Default::default()), key_frame(0));

        assert!(matches!(
            encoder.initialize_picture(input),
            Err(EncodeError::NullInterface(_))
        ));
        assert!(matches!(
            encoder.get_status_report(),
            Err(EncodeError::NullInterface(_))
        ));
    }

    #[test]
    fn test_sequence_required_on_first_frame() {
        let mut encoder = new_encoder(Default::default());
        assert!(matches!(
            encode(&mut encoder, None, key_frame(0)),
            Err(EncodeError::NullInterface("sequence parameters"))
        ));
    }

    #[test]
    fn test_missing_recon_surface() {
        let mut encoder = new_encoder(Default::default());
        let mut input = input(&mut encoder, Some(Default::default()), key_frame(0));
        input.recon_surface = None;

        assert!(matches!(
            encoder.encode_frame(input),
            Err(EncodeError::InvalidParameter("reconstructed surface"))
        ));
    }

    #[test]
    fn test_missing_reference() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(Default::default()), key_frame(0)).unwrap();

        assert!(matches!(
            encode(&mut encoder, None, inter_frame(1, 5, 5, 5)),
            Err(EncodeError::NullInterface("reference picture"))
        ));
    }

    #[test]
    fn test_cqp_key_frame() {
        let mut encoder = new_encoder(Default::default());
        let mut picture = key_frame(0);
        picture.loop_filter_level = [12, 0, 0, 0];
        encoder
            .backend_mut()
            .set_register(MMIO.bitstream_byte_count, 1234);

        encode(&mut encoder, Some(Default::default()), picture).unwrap();

        let backend = encoder.backend();
        assert!(backend.perf_tag_resets.is_empty());
        assert_eq!(
            backend.perf_tags,
            vec![
                PerfTag::Scaling,
                PerfTag::Scaling,
                PerfTag::MbEncPhase1,
                PerfTag::MbEncPhase2,
                PerfTag::Mpu,
                PerfTag::Pak,
                PerfTag::Tpu,
                PerfTag::Pak,
            ]
        );

        use EngineEvent::*;
        use GpuContext::*;
        assert_eq!(
            backend.events,
            vec![
                Submit(Render),
                Submit(Render),
                Submit(Render),
                Submit(Render),
                Submit(Render),
                Signal(Render),
                Wait {
                    waiter: Video,
                    on: Render
                },
                Submit(Video),
                Signal(Video),
                Wait {
                    waiter: Render,
                    on: Video
                },
                Submit(Render),
                Signal(Render),
                Wait {
                    waiter: Video,
                    on: Render
                },
                Submit(Video),
                Signal(Video),
            ]
        );

        // The RePAK pass is skipped by the GPU unless the TPU kernel asks for it.
        let resources = encoder.resources().unwrap();
        let video = backend.submitted_to(Video);
        assert_eq!(video.len(), 2);
        assert!(!video[0]
            .commands()
            .iter()
            .any(|c| matches!(c, Command::ConditionalBatchBufferEnd { .. })));
        assert_eq!(
            video[1].commands()[0],
            Command::ConditionalBatchBufferEnd {
                predicate: SkipPredicate::RepakDecision,
                buffer: resources.mpu_tpu.repak_decision,
                offset: 0,
            }
        );

        // Without bitrate control the MPU writes the encoder configuration itself.
        assert_eq!(backend.encoder_cfgs.len(), 1);
        assert_eq!(backend.encoder_cfgs[0].buffer, resources.mpu_tpu.picture_state);

        let report = encoder.get_status_report().unwrap();
        assert_eq!(report.codec_status, CodecStatus::Successful);
        assert_eq!(report.status_report_feedback_number, 100);
        assert_eq!(report.bitstream_size, 1234);
        assert_eq!(report.loop_filter_level, 12);
        assert_eq!(report.num_passes, 2);
    }

    #[test]
    fn test_performance_key_frame_skips_phase1() {
        let mut encoder = new_encoder(Default::default());
        let sequence = SequenceParameters {
            target_usage: 7,
            ..Default::default()
        };
        encode(&mut encoder, Some(sequence), key_frame(0)).unwrap();

        let backend = encoder.backend();
        assert_eq!(count(&backend.perf_tags, PerfTag::MbEncPhase1), 0);
        assert_eq!(count(&backend.perf_tags, PerfTag::MbEncPhase2), 1);
        assert_eq!(count(&backend.curbe_loads, KernelId::MbEncIChroma), 1);
        // Single pass without RePAK: the TPU runs after it.
        assert_eq!(backend.submitted_to(GpuContext::Video).len(), 1);
        assert_eq!(count(&backend.perf_tags, PerfTag::Tpu), 1);
    }

    #[test]
    fn test_16x_me_runs_once() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(Default::default()), key_frame(0)).unwrap();
        let first_frame_tags = encoder.backend().perf_tags.len();

        encode(&mut encoder, None, inter_frame(1, 0, 0, 0)).unwrap();

        let backend = encoder.backend();
        let tags = &backend.perf_tags[first_frame_tags..];
        assert_eq!(count(tags, PerfTag::Scaling), 2);
        assert_eq!(count(tags, PerfTag::Me), 2);

        let resources = encoder.resources().unwrap();
        let mv_data_index = Gen9CurbeBuilder.binding_tables().me.mv_data;
        let mv_data: Vec<_> = backend
            .bindings
            .iter()
            .filter(|(kernel, index, _)| *kernel == KernelId::Me && *index == mv_data_index)
            .map(|(_, _, binding)| *binding.resource())
            .collect();
        assert_eq!(
            mv_data,
            vec![
                resources.me_16x_mv_data.unwrap(),
                resources.me_4x_mv_data.unwrap()
            ]
        );

        let picture = &encoder.context().unwrap().picture;
        assert!(picture.me_16x_done);
        assert_eq!(picture.ref_frame_ctrl, 1);
    }

    #[test]
    fn test_me_reference_slots() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(Default::default()), key_frame(1)).unwrap();
        encode(&mut encoder, None, key_frame(2)).unwrap();
        // Golden aliases last and is dropped, alt takes the second slot.
        encode(&mut encoder, None, inter_frame(3, 1, 1, 2)).unwrap();

        let ctx = encoder.context().unwrap();
        assert_eq!(ctx.picture.ref_frame_ctrl, 0x5);

        let refs = Gen9CurbeBuilder.binding_tables().me.refs;
        let last_binding = |index: u32| {
            encoder
                .backend()
                .bindings
                .iter()
                .rev()
                .find(|(kernel, i, _)| *kernel == KernelId::Me && *i == index)
                .map(|(_, _, binding)| binding.clone())
        };
        let scaled_4x = |id: u8| ctx.references.get(PictureId(id)).unwrap().scaled_4x.unwrap();

        assert_eq!(
            last_binding(refs[0]),
            Some(SurfaceBinding::Vme {
                resource: scaled_4x(1)
            })
        );
        assert_eq!(
            last_binding(refs[1]),
            Some(SurfaceBinding::Vme {
                resource: scaled_4x(2)
            })
        );
        assert_eq!(last_binding(refs[2]), None);
    }

    #[test]
    fn test_mbenc_raw_last_reference() {
        let refs = Gen9CurbeBuilder.binding_tables().mbenc.refs;

        for use_raw_recon_ref in [true, false] {
            let mut encoder = new_encoder(Default::default());
            let sequence = SequenceParameters {
                use_raw_recon_ref,
                ..Default::default()
            };
            encode(&mut encoder, Some(sequence), key_frame(1)).unwrap();
            encode(&mut encoder, None, key_frame(2)).unwrap();
            encode(&mut encoder, None, key_frame(3)).unwrap();
            encode(&mut encoder, None, inter_frame(4, 1, 2, 3)).unwrap();

            let ctx = encoder.context().unwrap();
            assert_eq!(ctx.picture.ref_frame_ctrl, 0x7);

            let last_binding = |index: u32| {
                encoder
                    .backend()
                    .bindings
                    .iter()
                    .rev()
                    .find(|(kernel, i, _)| *kernel == KernelId::MbEncP && *i == index)
                    .map(|(_, _, binding)| binding.clone())
            };
            let entry = |id: u8| ctx.references.get(PictureId(id)).unwrap();

            let last = if use_raw_recon_ref {
                entry(1).raw
            } else {
                entry(1).recon
            };
            assert_eq!(
                last_binding(refs[0]),
                Some(SurfaceBinding::Vme { resource: last })
            );
            // Golden and alt are always searched in the reconstructed pictures.
            assert_eq!(
                last_binding(refs[1]),
                Some(SurfaceBinding::Vme {
                    resource: entry(2).recon
                })
            );
            assert_eq!(
                last_binding(refs[2]),
                Some(SurfaceBinding::Vme {
                    resource: entry(3).recon
                })
            );
            assert_ne!(entry(1).raw, entry(1).recon);
        }
    }

    #[test]
    fn test_wait_for_pak_of_previous_frame() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(Default::default()), key_frame(0)).unwrap();
        assert!(!encoder.context().unwrap().picture.policy.wait_for_pak);
        let first_frame_events = encoder.backend().events.len();

        encode(&mut encoder, None, inter_frame(1, 0, 0, 0)).unwrap();
        assert!(encoder.context().unwrap().picture.policy.wait_for_pak);
        assert_eq!(
            encoder.backend().events[first_frame_events],
            EngineEvent::Wait {
                waiter: GpuContext::Render,
                on: GpuContext::Video
            }
        );
    }

    #[test]
    fn test_brc_update_prepares_curbes() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(cbr_sequence()), key_frame(0)).unwrap();

        let backend = encoder.backend();
        assert_eq!(count(&backend.curbe_loads, KernelId::BrcInit), 1);
        assert_eq!(count(&backend.curbe_loads, KernelId::BrcIFrameDist), 1);
        assert_eq!(count(&backend.curbe_loads, KernelId::MbEncILuma), 1);
        assert_eq!(count(&backend.curbe_loads, KernelId::Mpu), 1);
        assert_eq!(count(&backend.curbe_loads, KernelId::Tpu), 1);
        let first_frame_loads = backend.curbe_loads.len();
        let first_frame_requests = backend.binding_table_requests.len();

        encode(&mut encoder, None, inter_frame(1, 0, 0, 0)).unwrap();

        let backend = encoder.backend();
        let loads = &backend.curbe_loads[first_frame_loads..];
        assert_eq!(count(loads, KernelId::BrcInit), 0);
        assert_eq!(count(loads, KernelId::BrcReset), 0);
        assert_eq!(count(loads, KernelId::BrcUpdate), 1);
        assert_eq!(count(loads, KernelId::MbEncP), 1);
        assert_eq!(count(loads, KernelId::Mpu), 1);
        assert_eq!(count(loads, KernelId::Tpu), 1);
        assert_eq!(
            &backend.binding_table_requests[first_frame_requests..],
            &[KernelId::MbEncP, KernelId::Mpu, KernelId::Tpu]
        );

        // A new performance counter starts right after each BRC update.
        assert_eq!(backend.perf_tag_resets.len(), 2);
        for &reset in &backend.perf_tag_resets {
            assert_eq!(backend.perf_tags[reset - 1], PerfTag::BrcUpdate);
            assert_eq!(backend.perf_tags[reset], PerfTag::MbEncPhase1);
        }

        // The encoder configuration of every BRC pass is written by the update kernel.
        let resources = encoder.resources().unwrap();
        let cfgs: Vec<_> = backend
            .encoder_cfgs
            .iter()
            .filter(|cfg| cfg.buffer == resources.brc.encoder_cfg_write)
            .collect();
        assert_eq!(cfgs.len(), 8);
        assert_eq!(
            cfgs[4..].iter().map(|cfg| cfg.offset).collect::<Vec<_>>(),
            vec![0, 128, 256, 384]
        );
        assert!(cfgs[4].first_pass && !cfgs[5].first_pass);
        assert_eq!(backend.encoder_cfgs.len(), 8);

        let bt = Gen9CurbeBuilder.binding_tables().brc_update;
        let cfg_bindings: Vec<_> = backend
            .bindings
            .iter()
            .filter(|(kernel, index, _)| {
                *kernel == KernelId::BrcUpdate
                    && (*index == bt.encoder_cfg_read || *index == bt.encoder_cfg_write)
            })
            .map(|(_, _, binding)| *binding.resource())
            .collect();
        assert_eq!(cfg_bindings.len(), 4);
        assert!(cfg_bindings
            .iter()
            .all(|resource| *resource == resources.brc.encoder_cfg_write));

        let picture = &encoder.context().unwrap().picture;
        assert_eq!(picture.mbenc_curbe, CurbeFreshness::Stale);
        assert_eq!(picture.mpu_curbe, CurbeFreshness::Stale);
        assert!(picture.encoder_cfg_initialized);
    }

    #[test]
    fn test_brc_reset() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(cbr_sequence()), key_frame(0)).unwrap();
        assert!(!encoder.context().unwrap().sequence.brc_init);
        let first_frame_loads = encoder.backend().curbe_loads.len();

        let sequence = SequenceParameters {
            reset_brc: true,
            ..cbr_sequence()
        };
        encode(&mut encoder, Some(sequence), key_frame(1)).unwrap();

        let loads = &encoder.backend().curbe_loads[first_frame_loads..];
        assert_eq!(count(loads, KernelId::BrcInit), 0);
        assert_eq!(count(loads, KernelId::BrcReset), 1);
    }

    #[test]
    fn test_brc_single_pass_statistics() {
        let mut encoder = new_encoder(Default::default());
        encoder
            .backend_mut()
            .set_register(MMIO.cumulative_dq_index01, 0x85);
        encode(&mut encoder, Some(cbr_sequence()), key_frame(0)).unwrap();

        let resources = encoder.resources().unwrap();
        let backend = encoder.backend();

        let picture_state = backend.resource_data(&resources.mpu_tpu.picture_state);
        assert_eq!(
            read_dword(&picture_state, PictureStateEndShim::DWORD),
            Some(PictureStateEndShim::VALUE)
        );

        let pak_statistics = backend.resource_data(&resources.brc.pak_statistics);
        assert_eq!(read_dword(&pak_statistics, 2), Some(0x100));
        assert_eq!(read_dword(&pak_statistics, 4), Some(0x85));

        // The passes reuse the encoder configuration written by the BRC update.
        let video = backend.submitted_to(GpuContext::Video);
        let cfg_offsets: Vec<_> = video
            .iter()
            .flat_map(|cmd| cmd.commands())
            .filter_map(|c| match c {
                Command::BatchBufferStart { buffer, offset }
                    if *buffer == resources.brc.encoder_cfg_write =>
                {
                    Some(*offset)
                }
                _ => None,
            })
            .collect();
        assert_eq!(cfg_offsets, vec![0, 0]);

        let report = encoder.get_status_report().unwrap();
        assert_eq!(report.average_qp, 5);
        assert_eq!(report.long_term_indication, 0);
    }

    #[test]
    fn test_multipass_brc() {
        let config = EncoderConfig {
            multipass_brc_supported: true,
            brc_precision: 1,
            ..Default::default()
        };
        let mut encoder = new_encoder(config);
        encode(&mut encoder, Some(cbr_sequence()), key_frame(0)).unwrap();

        let ctx = encoder.context().unwrap();
        assert_eq!(ctx.picture.brc_num_pak_passes, 2);
        assert_eq!(ctx.picture.policy.num_passes, 2);
        assert_eq!(ctx.picture.policy.repak_pass_iter, 2);

        let resources = encoder.resources().unwrap();
        let backend = encoder.backend();

        // The two BRC passes share one submission, the RePAK pass gets its own.
        let video = backend.submitted_to(GpuContext::Video);
        assert_eq!(video.len(), 2);
        let predicates = |cmd: &CommandBuffer<Handle>| {
            cmd.commands()
                .iter()
                .filter_map(|c| match c {
                    Command::ConditionalBatchBufferEnd { predicate, .. } => Some(*predicate),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(
            predicates(video[0]),
            vec![SkipPredicate::BrcPassContinuation]
        );
        assert_eq!(predicates(video[1]), vec![SkipPredicate::RepakDecision]);

        // The TPU kernel sees the number of the last BRC pass.
        let tpu_curbe_size = Gen9CurbeBuilder.kernel_layout(KernelId::Tpu).curbe_size;
        let tpu_curbe = backend.curbe_data(KernelId::Tpu, tpu_curbe_size);
        assert_eq!(read_dword(&tpu_curbe, 6), Some(0x200));
        let pak_statistics = backend.resource_data(&resources.brc.pak_statistics);
        assert_eq!(read_dword(&pak_statistics, 2), Some(0x200));

        assert_eq!(count(&backend.perf_tags, PerfTag::Tpu), 1);
        let report = encoder.get_status_report().unwrap();
        assert_eq!(report.num_passes, 3);
    }

    #[test]
    fn test_zero_gop_size_with_brc() {
        let mut encoder = new_encoder(Default::default());
        let sequence = SequenceParameters {
            gop_pic_size: 0,
            ..cbr_sequence()
        };
        encode(&mut encoder, Some(sequence), key_frame(0)).unwrap();

        assert!(matches!(
            encode(&mut encoder, None, inter_frame(1, 0, 0, 0)),
            Err(EncodeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_resolution_change() {
        let mut encoder = new_encoder(Default::default());
        encode(&mut encoder, Some(Default::default()), key_frame(0)).unwrap();
        let scaled = encoder
            .context()
            .unwrap()
            .references
            .get(PictureId(0))
            .unwrap()
            .scaled_4x
            .unwrap();

        let sequence = SequenceParameters {
            frame_width: 640,
            frame_height: 480,
            ..Default::default()
        };
        let input = input(&mut encoder, Some(sequence), key_frame(1));
        encoder.initialize_picture(input).unwrap();

        let intermediate = encoder.resources().unwrap().intermediate;
        assert_eq!(
            encoder.backend().resource_size(&intermediate),
            Some(640 * 480 * 2 + 640 * 480 / 4 + 64 * 1024)
        );
        assert_eq!(encoder.backend().resource_size(&scaled), None);
        assert_eq!(encoder.context().unwrap().sequence.geometry.width_in_mb, 40);
    }

    #[test]
    fn test_enc_only_has_no_pak() {
        let config = EncoderConfig {
            codec_function: CodecFunction::Enc,
            ..Default::default()
        };
        let mut encoder = new_encoder(config);
        let mut input = input(&mut encoder, Some(Default::default()), key_frame(0));
        input.recon_surface = None;
        encoder.encode_frame(input).unwrap();

        assert!(encoder
            .backend()
            .submitted_to(GpuContext::Video)
            .is_empty());
        assert!(matches!(
            encoder.execute_picture_level(0),
            Err(EncodeError::Unsupported)
        ));
    }
}
