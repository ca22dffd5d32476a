// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Bitrate control kernels.
//!
//! The init/reset kernel seeds the history buffer of the bitrate control once per sequence or
//! on client request. The update kernel runs every frame, reads the PAK statistics of the
//! previous frame and rewrites the curbes of the MBEnc, MPU and TPU kernels of the current
//! frame, which therefore reuse them instead of loading their own.

use log::debug;
use log::trace;

use crate::encoder::stateless::vp8::curbe::BrcInitResetCurbeParams;
use crate::encoder::stateless::vp8::curbe::BrcUpdateCurbeParams;
use crate::encoder::stateless::vp8::curbe::CurbeFreshness;
use crate::encoder::stateless::vp8::curbe::MpuCurbeParams;
use crate::encoder::stateless::vp8::curbe::TpuCurbeParams;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::mbenc;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::params::BRC_MAXIMUM_NUM_PASSES;
use crate::encoder::stateless::vp8::resources::BRC_CONSTANT_DATA_SIZE;
use crate::encoder::stateless::vp8::resources::BRC_HISTORY_BUFFER_SIZE;
use crate::encoder::stateless::vp8::resources::BRC_PAK_STATISTICS_SIZE;
use crate::encoder::stateless::vp8::resources::ENCODER_CFG_BUFFER_SIZE;
use crate::encoder::stateless::vp8::resources::HEADER_METADATA_SIZE;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::EncoderCfgParams;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::vp8::SequenceParameters;
use crate::encoder::vp8::MAX_TEMPORAL_LAYERS;
use crate::encoder::FrameType;
use crate::encoder::RateControlMethod;

const KBPS: u32 = 1000;
const MIN_BPS_RATIO: f64 = 0.1;
const MAX_BPS_RATIO: f64 = 3.5;

/// Bitrate control scalars carried from frame to frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrcState {
    pub current_target_buf_full_in_bits: f64,
    pub buf_size_in_bits: u32,
    pub input_bits_per_frame: f64,
}

impl BrcState {
    /// Stores the values computed by an init or reset. The buffer fullness is only seeded by an
    /// init, a reset keeps the current one.
    pub fn seed(&mut self, values: &BrcInitResetValues, init: bool) {
        if init {
            self.current_target_buf_full_in_bits = f64::from(values.init_buf_full_in_bits);
        }
        self.buf_size_in_bits = values.buf_size_in_bits;
        self.input_bits_per_frame = values.input_bits_per_frame;
    }

    /// Target size of the next frame, and whether the buffer wrapped around to produce it.
    pub fn next_target(&mut self) -> (u32, bool) {
        let buf_size = f64::from(self.buf_size_in_bits);
        let wrapped = self.current_target_buf_full_in_bits > buf_size;
        if wrapped {
            self.current_target_buf_full_in_bits -= buf_size;
        }

        (self.current_target_buf_full_in_bits as u32, wrapped)
    }

    /// Accounts for one more frame worth of bits in the buffer.
    pub fn account_frame(&mut self) {
        self.current_target_buf_full_in_bits += self.input_bits_per_frame;
    }
}

/// Rate parameters derived from the sequence for the init/reset kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrcInitResetValues {
    pub average_bit_rate: u32,
    pub max_bit_rate: u32,
    pub input_bits_per_frame: f64,
    pub buf_size_in_bits: u32,
    pub init_buf_full_in_bits: u32,
    pub bps_ratio: f64,
    pub max_level_ratios: [u32; MAX_TEMPORAL_LAYERS],
}

impl BrcInitResetValues {
    pub fn new(sequence: &SequenceParameters) -> EncodeResult<Self> {
        let top_layer = usize::from(sequence.num_temporal_layers_minus1);
        if top_layer >= MAX_TEMPORAL_LAYERS {
            return Err(EncodeError::InvalidParameter("number of temporal layers"));
        }

        let frame_rate = sequence.frames_per_100_sec[top_layer];
        if frame_rate == 0 {
            return Err(EncodeError::InvalidParameter("frame rate"));
        }

        let average_bit_rate = sequence.target_bit_rate[top_layer].saturating_mul(KBPS);
        let mut max_bit_rate = sequence.max_bit_rate.saturating_mul(KBPS);
        match sequence.rate_control_method {
            RateControlMethod::Cbr => max_bit_rate = average_bit_rate,
            RateControlMethod::Vbr if max_bit_rate < average_bit_rate => {
                max_bit_rate = average_bit_rate.saturating_mul(2)
            }
            _ => (),
        }

        let input_bits_per_frame = f64::from(max_bit_rate) * 100.0 / f64::from(frame_rate);

        let min_buf_size = (input_bits_per_frame as u32).saturating_mul(4);
        let buf_size_in_bits = sequence.vbv_buffer_size_in_bit.max(min_buf_size);

        let mut init_buf_full_in_bits = match sequence.init_vbv_buffer_fullness_in_bit {
            0 => (u64::from(buf_size_in_bits) * 7 / 8) as u32,
            fullness => fullness,
        };
        init_buf_full_in_bits = init_buf_full_in_bits
            .max((input_bits_per_frame * 2.0) as u32)
            .min(buf_size_in_bits);

        let bps_ratio = if buf_size_in_bits == 0 {
            MAX_BPS_RATIO
        } else {
            (input_bits_per_frame / (f64::from(buf_size_in_bits) / 30.0))
                .clamp(MIN_BPS_RATIO, MAX_BPS_RATIO)
        };

        let max_level_ratios = if top_layer > 0 {
            max_level_ratios_for_layers(
                &sequence.frames_per_100_sec,
                &sequence.target_bit_rate,
                top_layer,
            )?
        } else {
            [0; MAX_TEMPORAL_LAYERS]
        };

        Ok(Self {
            average_bit_rate,
            max_bit_rate,
            input_bits_per_frame,
            buf_size_in_bits,
            init_buf_full_in_bits,
            bps_ratio,
            max_level_ratios,
        })
    }
}

/// Share of the bit budget given to each temporal layer, out of 64, scaled by the frame rate
/// ratio of the base layer over the number of frames of the layer in one base period.
pub fn max_level_ratios_for_layers(
    frames_per_100_sec: &[u32; MAX_TEMPORAL_LAYERS],
    target_bit_rate: &[u32; MAX_TEMPORAL_LAYERS],
    top_layer: usize,
) -> EncodeResult<[u32; MAX_TEMPORAL_LAYERS]> {
    let num_layers = top_layer + 1;
    if frames_per_100_sec[..num_layers].contains(&0) {
        return Err(EncodeError::InvalidParameter("temporal layer frame rate"));
    }
    if target_bit_rate[top_layer] == 0 {
        return Err(EncodeError::InvalidParameter("temporal layer bitrate"));
    }

    let mut frame_rate_ratios = [0i64; MAX_TEMPORAL_LAYERS];
    for (ratio, rate) in frame_rate_ratios
        .iter_mut()
        .zip(&frames_per_100_sec[..num_layers])
    {
        *ratio = i64::from(frames_per_100_sec[top_layer] / rate);
    }

    let mut num_levels = [0i64; MAX_TEMPORAL_LAYERS];
    for (level, ratio) in num_levels
        .iter_mut()
        .zip(&frame_rate_ratios[..num_layers])
    {
        if *ratio == 0 {
            return Err(EncodeError::InvalidParameter("temporal layer frame rate"));
        }
        *level = (0..frame_rate_ratios[0]).filter(|t| t % ratio == 0).count() as i64;
    }

    let top_rate = i64::from(target_bit_rate[top_layer]);
    let mut ratios = [0i64; MAX_TEMPORAL_LAYERS];
    ratios[0] = i64::from(target_bit_rate[0]) * 64 / top_rate;
    let mut accumulated = ratios[0];
    for layer in 1..top_layer {
        ratios[layer] = (i64::from(target_bit_rate[layer]) - i64::from(target_bit_rate[layer - 1]))
            * 64
            / top_rate;
        accumulated += ratios[layer];
    }
    // The shares have to sum up to 64.
    ratios[top_layer] = 64 - accumulated;

    let mut result = [0u32; MAX_TEMPORAL_LAYERS];
    for layer in 0..num_layers {
        let level = if layer == 0 {
            num_levels[0]
        } else {
            num_levels[layer] - num_levels[layer - 1]
        };
        if level == 0 {
            return Err(EncodeError::InvalidParameter("temporal layer frame rate"));
        }
        result[layer] = (frame_rate_ratios[0] * ratios[layer] / level) as u32;
    }

    Ok(result)
}

/// Runs the init kernel on the first frame of a sequence, the reset kernel afterwards.
pub fn run_init_reset<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let init = ctx.sequence.brc_init;
    let kernel = if init {
        KernelId::BrcInit
    } else {
        KernelId::BrcReset
    };
    let geometry = ctx.sequence.geometry;

    env.backend.set_perf_tag(PerfTag::BrcInitReset);

    let values = BrcInitResetValues::new(&ctx.sequence.parameters)?;
    let curbe = env.builder.brc_init_reset_curbe(&BrcInitResetCurbeParams {
        sequence: &ctx.sequence.parameters,
        picture: &ctx.picture.parameters,
        frame_width: geometry.frame_width,
        frame_height: geometry.frame_height,
        average_bit_rate: values.average_bit_rate,
        max_bit_rate: values.max_bit_rate,
        init_buf_full_in_bits: values.init_buf_full_in_bits,
        buf_size_in_bits: values.buf_size_in_bits,
        bps_ratio: values.bps_ratio,
        max_level_ratios: values.max_level_ratios,
    });
    env.assign_and_load(kernel, &curbe)?;
    ctx.sequence.brc.seed(&values, init);

    debug!(
        "BRC {}: {} bits per frame, buffer of {} bits",
        if init { "init" } else { "reset" },
        values.input_bits_per_frame,
        values.buf_size_in_bits
    );

    let resources = env.resources;
    let bt = env.builder.binding_tables().brc_init_reset;
    let distortion = resources
        .brc
        .distortion
        .as_ref()
        .ok_or(EncodeError::NullInterface("BRC distortion"))?;

    env.bind_buffer(
        kernel,
        bt.history,
        &resources.brc.history,
        0,
        BRC_HISTORY_BUFFER_SIZE,
        true,
    )?;
    env.bind_2d(kernel, bt.distortion, distortion, true)?;

    env.submit(kernel, None, true)
}

/// Runs the update kernel. The MBEnc, MPU and TPU curbes of the frame are loaded here and the
/// encoder configuration is written for every possible bitrate control pass.
pub fn run_update<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let frame_type = ctx.picture.frame_type;
    let geometry = ctx.sequence.geometry;

    env.backend.set_perf_tag(PerfTag::BrcUpdate);

    let mbenc_kernel = match frame_type {
        FrameType::Intra => KernelId::MbEncILuma,
        FrameType::Inter => KernelId::MbEncP,
    };
    env.dispatch
        .assign_space(env.backend, env.builder, mbenc_kernel)?;
    if frame_type.is_intra() {
        env.dispatch
            .share_region(KernelId::MbEncILuma, KernelId::MbEncIChroma)?;
    }
    let mbenc_curbe = mbenc::curbe(env.builder, &ctx.sequence, &ctx.picture);
    env.dispatch
        .load_curbe(env.backend, mbenc_kernel, &mbenc_curbe)?;
    ctx.picture.mbenc_curbe = CurbeFreshness::FreshFromBrcUpdate;

    let picture = &ctx.picture;
    let sequence = &ctx.sequence;
    let repak = picture.policy.repak_pass_iter;

    let mpu_curbe = env.builder.mpu_curbe(&MpuCurbeParams {
        sequence: &sequence.parameters,
        picture: &picture.parameters,
        quant: &picture.quant,
        max_pak_passes: picture.brc_num_pak_passes,
    });
    env.assign_and_load(KernelId::Mpu, &mpu_curbe)?;

    let tpu_curbe = env.builder.tpu_curbe(&TpuCurbeParams {
        picture: &picture.parameters,
        quant: &picture.quant,
        frame_width_in_mb: geometry.width_in_mb,
        frame_height_in_mb: geometry.height_in_mb,
        rebinarization_frame_hdr: repak > 0,
        adaptive_repak: repak > 0 && env.config.adaptive_repak_supported,
        max_pak_passes: picture.brc_num_pak_passes,
    });
    env.assign_and_load(KernelId::Tpu, &tpu_curbe)?;

    let (target_size, target_size_flag) = ctx.sequence.brc.next_target();
    let sequence = &ctx.sequence;
    let picture = &ctx.picture;
    let update_curbe = env.builder.brc_update_curbe(&BrcUpdateCurbeParams {
        sequence: &sequence.parameters,
        picture: &picture.parameters,
        quant: &picture.quant,
        frame_type,
        kernel_mode: sequence.kernel_mode,
        ref_frame_ctrl: picture.ref_frame_ctrl,
        target_size,
        target_size_flag,
        brc_pak_passes: picture.brc_num_pak_passes,
        frame_width_in_mb: geometry.width_in_mb,
        frame_height_in_mb: geometry.height_in_mb,
    });
    env.assign_and_load(KernelId::BrcUpdate, &update_curbe)?;
    ctx.sequence.brc.account_frame();

    ctx.picture.mpu_curbe = CurbeFreshness::FreshFromBrcUpdate;
    ctx.picture.tpu_curbe = CurbeFreshness::FreshFromBrcUpdate;

    trace!(
        "BRC update: target size {} (wrapped: {})",
        target_size,
        target_size_flag
    );

    let resources = env.resources;
    let sequence = &ctx.sequence;
    let picture = &ctx.picture;
    for pass in 0..usize::from(BRC_MAXIMUM_NUM_PASSES) {
        env.backend.init_encoder_cfg(
            &resources.brc.encoder_cfg_write,
            pass * HEADER_METADATA_SIZE,
            &EncoderCfgParams {
                sequence: &sequence.parameters,
                picture: &picture.parameters,
                quant: &picture.quant,
                first_pass: pass == 0,
                brc_enabled: true,
                cfg_buffer_size: HEADER_METADATA_SIZE,
            },
        )?;
    }
    ctx.picture.encoder_cfg_initialized = true;

    let kernel = KernelId::BrcUpdate;
    let bt = env.builder.binding_tables().brc_update;
    let brc = &resources.brc;

    env.bind_buffer(
        kernel,
        bt.history,
        &brc.history,
        0,
        BRC_HISTORY_BUFFER_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.pak_statistics,
        &brc.pak_statistics,
        0,
        BRC_PAK_STATISTICS_SIZE,
        false,
    )?;
    // The configuration written above is what the kernel reads and patches.
    env.bind_buffer(
        kernel,
        bt.encoder_cfg_read,
        &brc.encoder_cfg_write,
        0,
        ENCODER_CFG_BUFFER_SIZE,
        false,
    )?;
    env.bind_buffer(
        kernel,
        bt.encoder_cfg_write,
        &brc.encoder_cfg_write,
        0,
        ENCODER_CFG_BUFFER_SIZE,
        true,
    )?;

    for (kernel_of_curbe, read, write) in [
        (mbenc_kernel, bt.mbenc_curbe_read, bt.mbenc_curbe_write),
        (KernelId::Mpu, bt.mpu_curbe_read, bt.mpu_curbe_write),
        (KernelId::Tpu, bt.tpu_curbe_read, bt.tpu_curbe_write),
    ] {
        let region = env.dispatch.region(kernel_of_curbe)?.clone();
        let size = region.curbe_size as usize;
        env.bind_buffer(kernel, read, &region.heap, region.curbe_offset, size, false)?;
        env.bind_buffer(kernel, write, &region.heap, region.curbe_offset, size, true)?;
    }

    let distortion = match frame_type {
        FrameType::Intra => brc.distortion.as_ref(),
        FrameType::Inter => resources.me_4x_distortion.as_ref(),
    }
    .ok_or(EncodeError::NullInterface("BRC update distortion"))?;
    env.bind_2d(kernel, bt.distortion, distortion, true)?;

    if let Some(constant_data) = &brc.constant_data {
        env.bind_buffer(
            kernel,
            bt.constant_data,
            constant_data,
            0,
            BRC_CONSTANT_DATA_SIZE,
            false,
        )?;
    }
    env.bind_2d(kernel, bt.segment_map, &brc.segment_map, true)?;

    env.submit(kernel, None, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cbr_sequence() -> SequenceParameters {
        SequenceParameters {
            rate_control_method: RateControlMethod::Cbr,
            target_bit_rate: [1000, 0, 0, 0],
            max_bit_rate: 4000,
            frames_per_100_sec: [3000, 0, 0, 0],
            ..Default::default()
        }
    }

    #[test]
    fn test_init_values_cbr() {
        let values = BrcInitResetValues::new(&cbr_sequence()).unwrap();

        assert_eq!(values.average_bit_rate, 1_000_000);
        // Constant bitrate ignores the maximum.
        assert_eq!(values.max_bit_rate, 1_000_000);
        assert!((values.input_bits_per_frame - 33_333.333).abs() < 0.01);
        // No buffer size given, four frames are used.
        assert_eq!(values.buf_size_in_bits, 133_332);
        assert_eq!(values.init_buf_full_in_bits, 116_665);
        assert_eq!(values.bps_ratio, MAX_BPS_RATIO);
        assert_eq!(values.max_level_ratios, [0; MAX_TEMPORAL_LAYERS]);
    }

    #[test]
    fn test_init_values_vbr() {
        let sequence = SequenceParameters {
            rate_control_method: RateControlMethod::Vbr,
            target_bit_rate: [2000, 0, 0, 0],
            max_bit_rate: 1000,
            frames_per_100_sec: [2500, 0, 0, 0],
            vbv_buffer_size_in_bit: 8_000_000,
            init_vbv_buffer_fullness_in_bit: 9_000_000,
            ..Default::default()
        };
        let values = BrcInitResetValues::new(&sequence).unwrap();

        // A maximum below the average is replaced by twice the average.
        assert_eq!(values.max_bit_rate, 4_000_000);
        assert_eq!(values.input_bits_per_frame, 160_000.0);
        assert_eq!(values.buf_size_in_bits, 8_000_000);
        // Clamped to the buffer size.
        assert_eq!(values.init_buf_full_in_bits, 8_000_000);
        assert!((values.bps_ratio - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_init_values_small_initial_fullness() {
        let sequence = SequenceParameters {
            init_vbv_buffer_fullness_in_bit: 10,
            vbv_buffer_size_in_bit: 1_000_000,
            ..cbr_sequence()
        };
        let values = BrcInitResetValues::new(&sequence).unwrap();

        // At least two frames worth of bits.
        assert_eq!(values.init_buf_full_in_bits, 66_666);
        assert!((values.bps_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_init_values_zero_frame_rate() {
        let sequence = SequenceParameters {
            frames_per_100_sec: [0; MAX_TEMPORAL_LAYERS],
            ..cbr_sequence()
        };
        assert!(matches!(
            BrcInitResetValues::new(&sequence),
            Err(EncodeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_max_level_ratios() {
        assert_eq!(
            max_level_ratios_for_layers(&[1500, 3000, 0, 0], &[500, 1000, 0, 0], 1).unwrap(),
            [64, 64, 0, 0]
        );
        assert_eq!(
            max_level_ratios_for_layers(&[750, 1500, 3000, 0], &[250, 500, 1000, 0], 2).unwrap(),
            [64, 64, 64, 0]
        );
        // Base layer with a quarter of the bitrate and half the frames.
        assert_eq!(
            max_level_ratios_for_layers(&[1500, 3000, 0, 0], &[250, 1000, 0, 0], 1).unwrap(),
            [32, 96, 0, 0]
        );
        assert!(max_level_ratios_for_layers(&[0, 3000, 0, 0], &[500, 1000, 0, 0], 1).is_err());
    }

    #[test]
    fn test_temporal_layers_in_init_values() {
        let sequence = SequenceParameters {
            num_temporal_layers_minus1: 1,
            target_bit_rate: [500, 1000, 0, 0],
            frames_per_100_sec: [1500, 3000, 0, 0],
            ..cbr_sequence()
        };
        let values = BrcInitResetValues::new(&sequence).unwrap();

        // The top layer drives the rate.
        assert_eq!(values.average_bit_rate, 1_000_000);
        assert_eq!(values.max_level_ratios, [64, 64, 0, 0]);
    }

    #[test]
    fn test_target_size_accounting() {
        let mut state = BrcState::default();
        let values = BrcInitResetValues {
            average_bit_rate: 0,
            max_bit_rate: 0,
            input_bits_per_frame: 400.0,
            buf_size_in_bits: 1000,
            init_buf_full_in_bits: 700,
            bps_ratio: 1.0,
            max_level_ratios: [0; MAX_TEMPORAL_LAYERS],
        };
        state.seed(&values, true);

        assert_eq!(state.next_target(), (700, false));
        state.account_frame();
        // 1100 overflows the buffer.
        assert_eq!(state.next_target(), (100, true));
        state.account_frame();
        assert_eq!(state.next_target(), (500, false));

        // A reset keeps the fullness.
        let reset = BrcInitResetValues {
            buf_size_in_bits: 2000,
            input_bits_per_frame: 100.0,
            ..values
        };
        state.seed(&reset, false);
        assert_eq!(state.current_target_buf_full_in_bits, 500.0);
        assert_eq!(state.buf_size_in_bits, 2000);
        assert_eq!(state.input_bits_per_frame, 100.0);
    }
}
