// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::encoder::stateless::vp8::curbe::CurbeFreshness;
use crate::encoder::stateless::vp8::curbe::MbEncCurbeParams;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::reference_slots;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::resources::HISTOGRAM_SIZE;
use crate::encoder::stateless::vp8::resources::MODE_COST_UPDATE_SIZE;
use crate::encoder::stateless::vp8::resources::REF_MB_COUNT_SIZE;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::vp8::PictureContext;
use crate::encoder::stateless::vp8::SequenceContext;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::stateless::WalkerParams;
use crate::encoder::stateless::WalkerPattern;
use crate::encoder::FrameType;

/// Which pass of the mode decision kernel to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbEncPhase {
    /// Luma of key frames, whole macroblocks of inter frames.
    Phase1,
    /// Chroma of key frames.
    Phase2 { phase1_ran: bool },
    /// Intra distortion estimate of key frames for the bitrate control.
    IFrameDistortion,
}

impl MbEncPhase {
    fn kernel(self, frame_type: FrameType) -> EncodeResult<KernelId> {
        match (self, frame_type) {
            (MbEncPhase::IFrameDistortion, _) => Ok(KernelId::BrcIFrameDist),
            (MbEncPhase::Phase1, FrameType::Intra) => Ok(KernelId::MbEncILuma),
            (MbEncPhase::Phase1, FrameType::Inter) => Ok(KernelId::MbEncP),
            (MbEncPhase::Phase2 { .. }, FrameType::Intra) => Ok(KernelId::MbEncIChroma),
            (MbEncPhase::Phase2 { .. }, FrameType::Inter) => Err(EncodeError::InvalidInternalState),
        }
    }

    /// Whether this phase sets up the curbe itself rather than using the one of phase 1.
    fn owns_curbe(self) -> bool {
        !matches!(self, MbEncPhase::Phase2 { phase1_ran: true })
    }
}

/// Curbe of the mode decision kernels for the current frame.
pub(crate) fn curbe<C: Vp8CurbeBuilder, R>(
    builder: &C,
    sequence: &SequenceContext,
    picture: &PictureContext<R>,
) -> Vec<u8> {
    builder.mbenc_curbe(&MbEncCurbeParams {
        sequence: &sequence.parameters,
        picture: &picture.parameters,
        quant: &picture.quant,
        frame_type: picture.frame_type,
        kernel_mode: sequence.kernel_mode,
        hme_enabled: picture.hme_enabled,
        ref_frame_ctrl: picture.ref_frame_ctrl,
        frame_position_in_gop: picture.frame_position_in_gop,
        average_key_frame_qp: sequence.average_key_frame_qp,
        average_p_frame_qp: sequence.average_p_frame_qp,
    })
}

pub fn run<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
    phase: MbEncPhase,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let frame_type = ctx.picture.frame_type;
    let kernel = phase.kernel(frame_type)?;
    let distortion_pass = phase == MbEncPhase::IFrameDistortion;
    let geometry = ctx.sequence.geometry;
    let resources = env.resources;

    env.backend.set_perf_tag(match phase {
        MbEncPhase::Phase1 => PerfTag::MbEncPhase1,
        MbEncPhase::Phase2 { .. } => PerfTag::MbEncPhase2,
        MbEncPhase::IFrameDistortion => PerfTag::IntraDistortion,
    });

    if phase.owns_curbe() {
        if ctx.picture.mbenc_curbe.set_in_brc_update() && !distortion_pass {
            env.dispatch.reuse_curbe(env.backend, env.builder, kernel)?;
        } else {
            env.dispatch.assign_space(env.backend, env.builder, kernel)?;
            if kernel == KernelId::MbEncILuma {
                env.dispatch
                    .share_region(KernelId::MbEncILuma, KernelId::MbEncIChroma)?;
            }

            let data = curbe(env.builder, &ctx.sequence, &ctx.picture);
            env.dispatch.load_curbe(env.backend, kernel, &data)?;
            if !distortion_pass {
                ctx.picture.mbenc_curbe = CurbeFreshness::FreshFromDirectSet;
            }
        }

        if frame_type.is_intra() {
            let (luma, block) = env.builder.mbenc_i_cost_tables();
            env.backend
                .write_resource(&resources.mb_mode_cost_luma, 0, &luma)?;
            env.backend
                .write_resource(&resources.block_mode_cost, 0, &block)?;
        }

        if distortion_pass && ctx.picture.init_brc_distortion {
            resources.clear_brc_distortion(env.backend, &geometry)?;
        }

        if env.config.codec_function.pak_enabled() {
            env.backend
                .fill_resource(&resources.histogram, 0, HISTOGRAM_SIZE, 0)?;
        }
    } else {
        env.dispatch.reuse_curbe(env.backend, env.builder, kernel)?;
    }

    let picture = &ctx.picture;
    let bt = env.builder.binding_tables().mbenc;
    let num_mbs = geometry.num_mbs() as usize;
    let raw = &picture.raw_surface;

    env.bind_buffer(kernel, bt.per_mb_out, &resources.mb_code, 0, num_mbs * 16, true)?;
    env.bind_2d(kernel, bt.curr_y, raw, false)?;
    env.bind_2d(kernel, bt.curr_uv, raw, false)?;
    env.bind_vme(kernel, bt.vme, raw)?;

    let segment_map = if picture.parameters.segmentation_enabled {
        let map = if ctx.sequence.parameters.mbbrc == 1 {
            Some(&resources.brc.segment_map)
        } else {
            picture.segment_map.as_ref()
        };
        Some(map.ok_or(EncodeError::InvalidParameter("segmentation map"))?)
    } else {
        None
    };

    match frame_type {
        FrameType::Intra => {
            env.bind_2d(kernel, bt.mb_mode_cost_luma, &resources.mb_mode_cost_luma, true)?;
            env.bind_2d(kernel, bt.block_mode_cost, &resources.block_mode_cost, true)?;
            env.bind_buffer(
                kernel,
                bt.chroma_recon,
                &resources.chroma_recon,
                0,
                64 * num_mbs,
                true,
            )?;
            env.bind_buffer(kernel, bt.histogram, &resources.histogram, 0, HISTOGRAM_SIZE, true)?;
            if let Some(map) = segment_map {
                env.bind_2d(kernel, bt.segmentation_map, map, false)?;
            }

            if distortion_pass {
                let distortion = resources
                    .brc
                    .distortion
                    .as_ref()
                    .ok_or(EncodeError::NullInterface("BRC distortion"))?;
                let scaled = ctx
                    .references
                    .get(picture.parameters.curr_reconstructed_pic)?
                    .scaled_4x
                    .as_ref()
                    .ok_or(EncodeError::NullInterface("4x scaled surface"))?;

                env.bind_2d(kernel, bt.idist, distortion, true)?;
                env.bind_2d(kernel, bt.curr_y_downscaled, scaled, false)?;
                env.bind_vme(kernel, bt.vme_coarse_intra, scaled)?;
            }
        }
        FrameType::Inter => {
            let layout = resources.mb_code_layout;
            env.bind_buffer(
                kernel,
                bt.ind_mv_data,
                &resources.mb_code,
                layout.mv_offset,
                num_mbs * 64,
                true,
            )?;

            if picture.hme_enabled {
                let mv_data = resources
                    .me_4x_mv_data
                    .as_ref()
                    .ok_or(EncodeError::NullInterface("ME MV data"))?;
                env.bind_2d(kernel, bt.mv_data_from_me, mv_data, false)?;
            }

            env.bind_buffer(
                kernel,
                bt.ref_mb_count,
                &resources.ref_mb_count,
                0,
                REF_MB_COUNT_SIZE,
                true,
            )?;
            env.bind_vme(kernel, bt.inter_pred, raw)?;

            let use_raw_recon_ref = ctx.sequence.parameters.use_raw_recon_ref;
            let roles = [
                picture.parameters.last_ref_pic,
                picture.parameters.golden_ref_pic,
                picture.parameters.alt_ref_pic,
            ];
            let slots = reference_slots(picture.ref_frame_ctrl);
            for (i, (role, slot)) in roles.into_iter().zip(slots).enumerate() {
                let Some(slot) = slot else {
                    continue;
                };
                if !role.is_valid() {
                    continue;
                }

                // Only the last reference may be the raw picture.
                let entry = ctx.references.get(role)?;
                let surface = entry.effective(i == 0 && use_raw_recon_ref);
                env.bind_vme(kernel, bt.refs[slot], surface)?;
            }

            env.bind_2d(kernel, bt.per_mb_quant, &resources.per_mb_quant, false)?;
            if let Some(map) = segment_map {
                env.bind_2d(kernel, bt.segmentation_map, map, false)?;
            }

            if let Some(distortion) = &resources.me_4x_distortion {
                env.bind_2d(kernel, bt.inter_pred_distortion, distortion, false)?;
            }
            env.bind_buffer(
                kernel,
                bt.per_mv_data,
                &resources.pred_mv_data,
                0,
                num_mbs * 16,
                true,
            )?;
            env.bind_buffer(kernel, bt.histogram, &resources.histogram, 0, HISTOGRAM_SIZE, true)?;
            env.bind_buffer(
                kernel,
                bt.mode_cost_update,
                &resources.mode_cost_update,
                0,
                MODE_COST_UPDATE_SIZE,
                false,
            )?;
        }
    }

    let (resolution_x, resolution_y) = if distortion_pass {
        (
            geometry.downscaled_width_in_mb_4x,
            geometry.downscaled_height_in_mb_4x,
        )
    } else {
        (geometry.width_in_mb, geometry.height_in_mb)
    };
    let pattern = if frame_type.is_intra() && !matches!(phase, MbEncPhase::Phase2 { .. }) {
        WalkerPattern::NoDependency
    } else {
        WalkerPattern::Degree45
    };
    let walker = WalkerParams {
        resolution_x,
        resolution_y,
        pattern,
        use_scoreboard: env.config.use_hw_scoreboard,
    };

    env.submit(kernel, Some(walker), phase.owns_curbe())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_kernels() {
        assert_eq!(
            MbEncPhase::Phase1.kernel(FrameType::Intra).unwrap(),
            KernelId::MbEncILuma
        );
        assert_eq!(
            MbEncPhase::Phase1.kernel(FrameType::Inter).unwrap(),
            KernelId::MbEncP
        );
        assert_eq!(
            MbEncPhase::Phase2 { phase1_ran: false }
                .kernel(FrameType::Intra)
                .unwrap(),
            KernelId::MbEncIChroma
        );
        assert_eq!(
            MbEncPhase::IFrameDistortion
                .kernel(FrameType::Intra)
                .unwrap(),
            KernelId::BrcIFrameDist
        );
        assert!(MbEncPhase::Phase2 { phase1_ran: true }
            .kernel(FrameType::Inter)
            .is_err());
    }

    #[test]
    fn test_curbe_ownership() {
        assert!(MbEncPhase::Phase1.owns_curbe());
        assert!(MbEncPhase::IFrameDistortion.owns_curbe());
        assert!(MbEncPhase::Phase2 { phase1_ran: false }.owns_curbe());
        assert!(!MbEncPhase::Phase2 { phase1_ran: true }.owns_curbe());
    }
}
