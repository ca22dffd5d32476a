// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Video engine side of the encoder: the MFX commands of every PAK pass, the read back of the
//! pass statistics and the TPU kernel run between the last regular pass and the RePAK pass.
//!
//! A pass is recorded in two halves. [`execute_picture_level`] opens the command buffer and
//! programs the pipeline, [`execute_slice_level`] reads the statistics back and submits it, or
//! leaves it open when the next bitrate control pass appends to it.

use log::debug;
use log::error;
use log::trace;

use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::tpu;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::params::deblocking_outputs;
use crate::encoder::stateless::vp8::params::reference_pictures;
use crate::encoder::stateless::vp8::resources::BRC_IMG_STATE_SIZE_PER_PASS;
use crate::encoder::stateless::vp8::resources::INTERMEDIATE_PARTITION0_SIZE;
use crate::encoder::stateless::vp8::resources::PAK_STATS_DUMP_DWORDS;
use crate::encoder::stateless::vp8::status::record_offset;
use crate::encoder::stateless::vp8::status::BYTE_COUNT_OFFSET;
use crate::encoder::stateless::vp8::status::COMPLETION_OFFSET;
use crate::encoder::stateless::vp8::status::FEEDBACK_NUMBER_OFFSET;
use crate::encoder::stateless::vp8::status::HEADER_BYTES_OFFSET;
use crate::encoder::stateless::vp8::status::IMAGE_STATUS_CTRL_OFFSET;
use crate::encoder::stateless::vp8::status::IMAGE_STATUS_MASK_OFFSET;
use crate::encoder::stateless::vp8::status::LOOP_FILTER_LEVEL_OFFSET;
use crate::encoder::stateless::vp8::status::NUM_PASSES_OFFSET;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::BspBuffers;
use crate::encoder::stateless::Command;
use crate::encoder::stateless::CommandBuffer;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::GpuContext;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::MfxMmioRegisters;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::SkipPredicate;
use crate::encoder::stateless::StatelessBackendError;
use crate::encoder::stateless::StatelessBackendResult;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::stateless::SurfaceRole;
use crate::encoder::FrameType;

/// Byte offsets of the fields of the bitrate control PAK statistics buffer.
mod pak_stats {
    pub const BITSTREAM_BYTE_COUNT: u32 = 0;
    pub const PASS_NUM: u32 = 2 * 4;
    pub const FIRST_PASS_CUMULATIVE_DQ_INDEX01: u32 = 4 * 4;
    pub const DQ_INDEX: u32 = 5 * 4;
    pub const D_LOOP_FILTER: u32 = 6 * 4;
    pub const CUMULATIVE_DQ_INDEX01: u32 = 9 * 4;
    pub const CUMULATIVE_DQ_INDEX23: u32 = 10 * 4;
    pub const CUMULATIVE_LOOP_FILTER01: u32 = 11 * 4;
    pub const CUMULATIVE_LOOP_FILTER23: u32 = 12 * 4;
    pub const CONVERGENCE_STATUS: u32 = 13 * 4;
}

/// Value written in the pass number field of the statistics read by the kernels.
fn pass_num_value(pass: u8) -> u32 {
    (u32::from(pass) + 1) << 8
}

/// Offset in the BRC written encoder configuration buffer of the command used by `pass`. The
/// RePAK pass uses the configuration of the first pass.
pub fn encoder_cfg_offset(pass: u8, repak_pass_iter: u8) -> u32 {
    if repak_pass_iter > 0 && pass == repak_pass_iter {
        0
    } else {
        u32::from(pass) * BRC_IMG_STATE_SIZE_PER_PASS as u32
    }
}

/// Whether the TPU kernel runs after `pass`: after the pass preceding the RePAK pass, or after
/// the last pass of a frame without RePAK.
pub fn tpu_runs_after(pass: u8, num_passes: u8, repak_pass_iter: u8) -> bool {
    if repak_pass_iter > 0 {
        pass + 1 == num_passes
    } else {
        pass == num_passes
    }
}

/// Terminates the picture state command buffer with a batch buffer end so that it can be
/// chained with a batch buffer start.
pub struct PictureStateEndShim;

impl PictureStateEndShim {
    pub const DWORD: usize = 38;
    pub const VALUE: u32 = 0x0500_0000;

    pub fn apply<B: StatelessVP8EncoderBackend>(
        backend: &mut B,
        picture_state: &B::Resource,
    ) -> StatelessBackendResult<()> {
        backend
            .write_resource(picture_state, Self::DWORD * 4, &Self::VALUE.to_le_bytes())
            .map_err(|e| {
                error!("failed to terminate the picture state: {}", e);
                StatelessBackendError::LockFailed("picture state")
            })
    }
}

/// Stores the PAK statistics registers at `base` in `buffer`, in the debug dump layout.
fn push_pak_stats_dump<R: Clone>(
    cmd: &mut CommandBuffer<R>,
    mmio: &MfxMmioRegisters,
    buffer: &R,
    base: u32,
) {
    let registers = [
        (0, mmio.image_status_mask),
        (1, mmio.image_status_ctrl),
        (2, mmio.bitstream_byte_count),
        (5, mmio.cumulative_dq_index01),
        (6, mmio.cumulative_dq_index23),
        (7, mmio.cumulative_loop_filter01),
        (8, mmio.cumulative_loop_filter23),
        (9, mmio.convergence_status),
    ];

    for (dword, register) in registers {
        cmd.push(Command::StoreRegisterMem {
            register,
            buffer: buffer.clone(),
            offset: base + dword * 4,
        });
    }
}

fn pak_stats_dump_offset(pass: u8) -> u32 {
    u32::from(pass) * (PAK_STATS_DUMP_DWORDS * 4) as u32
}

/// Records the picture level commands of the current pass.
pub fn execute_picture_level<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    if !env.config.codec_function.pak_enabled() {
        return Err(EncodeError::Unsupported);
    }

    let resources = env.resources;
    let geometry = ctx.sequence.geometry;
    let brc_enabled = ctx.sequence.brc_enabled;
    let picture = &ctx.picture;
    let pass = ctx.pass.current_pass;
    let repak = picture.policy.repak_pass_iter;
    let record = record_offset(picture.store_data);
    let mmio = env.backend.mmio();

    env.backend.set_gpu_context(GpuContext::Video)?;
    env.backend.set_perf_tag(PerfTag::Pak);

    let mut cmd = ctx.pass.video_cmd.take().unwrap_or_default();

    if brc_enabled && pass > 0 && (pass < repak || repak == 0) {
        cmd.push(Command::ConditionalBatchBufferEnd {
            predicate: SkipPredicate::BrcPassContinuation,
            buffer: resources.status.clone(),
            offset: record + IMAGE_STATUS_MASK_OFFSET,
        });
    }

    if repak > 0 && pass == repak {
        cmd.push(Command::ConditionalBatchBufferEnd {
            predicate: SkipPredicate::RepakDecision,
            buffer: resources.mpu_tpu.repak_decision.clone(),
            offset: 0,
        });
    }

    cmd.push(Command::StoreDataImm {
        buffer: resources.status.clone(),
        offset: record + FEEDBACK_NUMBER_OFFSET,
        value: picture.parameters.status_report_feedback_number,
    });

    let suppress_recon_pic = !picture.used_as_ref && env.config.suppress_recon_pic_supported;
    let (pre_deblock_out, post_deblock_out) =
        deblocking_outputs(picture.parameters.version, suppress_recon_pic);
    cmd.push(Command::MfxPipeModeSelect {
        pre_deblock_out,
        post_deblock_out,
    });

    cmd.push(Command::MfxSurfaceState {
        role: SurfaceRole::Reconstructed,
        surface: picture.recon_surface.clone(),
    });
    cmd.push(Command::MfxSurfaceState {
        role: SurfaceRole::Source,
        surface: picture.raw_surface.clone(),
    });

    let references = reference_pictures(&picture.parameters)
        .into_iter()
        .map(|id| ctx.references.get(id).map(|entry| entry.recon.clone()))
        .collect::<EncodeResult<Vec<_>>>()?;
    cmd.push(Command::MfxPipeBufAddr {
        pre_deblock: Some(picture.recon_surface.clone()),
        post_deblock: Some(picture.recon_surface.clone()),
        raw: picture.raw_surface.clone(),
        references,
        intra_row_store: resources.intra_row_store.clone(),
    });

    cmd.push(Command::MfxIndObjBaseAddr {
        mb_code: resources.mb_code.clone(),
        mv_offset: resources.mb_code_layout.mv_offset,
    });

    let pixels = geometry.frame_width * geometry.frame_height;
    let key_frame_repak =
        repak > 0 && pass == repak && picture.frame_type == FrameType::Intra;
    let coeff_probs = if key_frame_repak {
        &resources.mpu_tpu.key_frame_token_probability
    } else {
        &resources.mpu_tpu.coeff_probs
    };
    cmd.push(Command::MfxVp8BspBufBaseAddr(BspBuffers {
        frame_header: resources.frame_header.clone(),
        intermediate: resources.intermediate.clone(),
        partition0_offset: 0,
        partition0_size: pixels / 4 + INTERMEDIATE_PARTITION0_SIZE as u32,
        token_partitions_size: pixels * 2,
        num_partitions: 1 << picture.parameters.coded_coeff_token_partition,
        coded_buffer: picture.coded_buffer.clone(),
        coeff_probs: coeff_probs.clone(),
        token_statistics: resources.mpu_tpu.pak_token_statistics.clone(),
        mpu_bitstream: resources.mpu_tpu.mpu_bitstream.clone(),
        tpu_bitstream: resources.mpu_tpu.tpu_bitstream.clone(),
        entropy_cost: resources.mpu_tpu.entropy_cost_table.clone(),
    }));

    push_pak_stats_dump(
        &mut cmd,
        &mmio,
        &resources.brc.pak_stats_before_dump,
        pak_stats_dump_offset(pass),
    );

    cmd.push(Command::BatchBufferStart {
        buffer: resources.mpu_tpu.picture_state.clone(),
        offset: 0,
    });

    if brc_enabled {
        cmd.push(Command::BatchBufferStart {
            buffer: resources.brc.encoder_cfg_write.clone(),
            offset: encoder_cfg_offset(pass, repak),
        });
    }

    cmd.push(Command::BatchBufferStart {
        buffer: resources.mb_code.clone(),
        offset: 0,
    });

    trace!("pass {}: picture level recorded", pass);
    ctx.pass.video_cmd = Some(cmd);
    Ok(())
}

/// Stores the MFX status registers into the status record of the frame.
fn read_mfc_status<R: Clone>(
    cmd: &mut CommandBuffer<R>,
    mmio: &MfxMmioRegisters,
    status: &R,
    record: u32,
) {
    cmd.push(Command::FlushDw);
    for (register, offset) in [
        (mmio.bitstream_byte_count, BYTE_COUNT_OFFSET),
        (mmio.image_status_mask, IMAGE_STATUS_MASK_OFFSET),
        (mmio.image_status_ctrl, IMAGE_STATUS_CTRL_OFFSET),
    ] {
        cmd.push(Command::StoreRegisterMem {
            register,
            buffer: status.clone(),
            offset: record + offset,
        });
    }
    cmd.push(Command::FlushDw);
}

/// Stores the statistics consumed by the bitrate control kernel of the next frame.
fn read_brc_pak_statistics<R: Clone>(
    cmd: &mut CommandBuffer<R>,
    mmio: &MfxMmioRegisters,
    pak_statistics: &R,
    pass: u8,
    brc_num_pak_passes: u8,
) {
    use pak_stats::*;

    cmd.push(Command::FlushDw);

    if pass < brc_num_pak_passes {
        cmd.push(Command::StoreDataImm {
            buffer: pak_statistics.clone(),
            offset: PASS_NUM,
            value: pass_num_value(pass),
        });
    }

    let mut registers = vec![
        (mmio.bitstream_byte_count, BITSTREAM_BYTE_COUNT),
        (mmio.dq_index, DQ_INDEX),
        (mmio.d_loop_filter, D_LOOP_FILTER),
    ];
    if pass == 0 {
        registers.push((mmio.cumulative_dq_index01, FIRST_PASS_CUMULATIVE_DQ_INDEX01));
    }
    registers.extend([
        (mmio.cumulative_dq_index01, CUMULATIVE_DQ_INDEX01),
        (mmio.cumulative_dq_index23, CUMULATIVE_DQ_INDEX23),
        (mmio.cumulative_loop_filter01, CUMULATIVE_LOOP_FILTER01),
        (mmio.cumulative_loop_filter23, CUMULATIVE_LOOP_FILTER23),
        (mmio.convergence_status, CONVERGENCE_STATUS),
    ]);

    for (register, offset) in registers {
        cmd.push(Command::StoreRegisterMem {
            register,
            buffer: pak_statistics.clone(),
            offset,
        });
    }
}

/// Patches the pass number and, on the first pass, the cumulative statistics into the TPU
/// curbe already loaded by the bitrate control update.
fn set_pak_stats_in_tpu_curbe<B, C>(
    env: &mut KernelEnv<B, C>,
    cmd: &mut CommandBuffer<B::Resource>,
    pass: u8,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let region = env.dispatch.region(KernelId::Tpu)?;
    let layout = env.builder.tpu_pak_stats_layout();
    let mmio = env.backend.mmio();
    let dword = |index: u32| region.curbe_offset + index * 4;

    cmd.push(Command::StoreDataImm {
        buffer: region.heap.clone(),
        offset: dword(layout.pak_pass_num),
        value: pass_num_value(pass),
    });

    if pass == 0 {
        for (register, index) in [
            (mmio.cumulative_dq_index01, layout.cumulative_dq_index01),
            (mmio.cumulative_dq_index23, layout.cumulative_dq_index23),
            (mmio.cumulative_loop_filter01, layout.cumulative_loop_filter01),
            (mmio.cumulative_loop_filter23, layout.cumulative_loop_filter23),
        ] {
            cmd.push(Command::StoreRegisterMem {
                register,
                buffer: region.heap.clone(),
                offset: dword(index),
            });
        }
    }

    Ok(())
}

/// Writes the pass count and loop filter level of the frame and marks its record complete.
fn end_status<R: Clone>(cmd: &mut CommandBuffer<R>, ctx: &EncodeContext<R>, status: &R) {
    let record = record_offset(ctx.picture.store_data);

    for (offset, value) in [
        (NUM_PASSES_OFFSET, u32::from(ctx.pass.current_pass) + 1),
        (HEADER_BYTES_OFFSET, 0),
        (
            LOOP_FILTER_LEVEL_OFFSET,
            u32::from(ctx.picture.parameters.loop_filter_level[0]),
        ),
        (COMPLETION_OFFSET, ctx.picture.store_data),
    ] {
        cmd.push(Command::StoreDataImm {
            buffer: status.clone(),
            offset: record + offset,
            value,
        });
    }
}

/// Closes and submits the video command buffer, after the render engine work it depends on.
fn submit_video<B: StatelessVP8EncoderBackend>(
    backend: &mut B,
    mut cmd: CommandBuffer<B::Resource>,
    wait_for_render: bool,
    signal: bool,
) -> EncodeResult<()> {
    cmd.push(Command::BatchBufferEnd);

    if wait_for_render {
        backend.engine_wait(GpuContext::Video, GpuContext::Render)?;
    }
    backend.submit(GpuContext::Video, cmd)?;
    if signal {
        backend.engine_signal(GpuContext::Video)?;
    }

    Ok(())
}

/// Finishes a multi-pass bitrate control pass, leaving the command buffer open unless it is
/// the last pass submitted before the TPU kernel.
fn execute_slice_level_brc<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
    mut cmd: CommandBuffer<B::Resource>,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let resources = env.resources;
    let pass = ctx.pass.current_pass;
    let policy = ctx.picture.policy;
    let mmio = env.backend.mmio();

    push_pak_stats_dump(
        &mut cmd,
        &mmio,
        &resources.brc.pak_stats_after_dump,
        pak_stats_dump_offset(pass),
    );
    read_brc_pak_statistics(
        &mut cmd,
        &mmio,
        &resources.brc.pak_statistics,
        pass,
        ctx.picture.brc_num_pak_passes,
    );
    PictureStateEndShim::apply(env.backend, &resources.mpu_tpu.picture_state)?;
    set_pak_stats_in_tpu_curbe(env, &mut cmd, pass)?;
    end_status(&mut cmd, ctx, &resources.status);

    if tpu_runs_after(pass, policy.num_passes, policy.repak_pass_iter) {
        submit_video(env.backend, cmd, true, ctx.picture.signal_enc)?;
    } else {
        trace!("pass {}: keeping the video commands open", pass);
        ctx.pass.video_cmd = Some(cmd);
    }

    Ok(())
}

/// Records the slice level commands of the current pass, submits the video work when due and
/// runs the TPU kernel after the pass preceding the RePAK pass.
pub fn execute_slice_level<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let mut cmd = ctx
        .pass
        .video_cmd
        .take()
        .ok_or(EncodeError::NullInterface("picture level commands"))?;

    let resources = env.resources;
    let brc_enabled = ctx.sequence.brc_enabled;
    let pass = ctx.pass.current_pass;
    let policy = ctx.picture.policy;
    let num_passes = policy.num_passes;
    let repak = policy.repak_pass_iter;
    let signal_enc = ctx.picture.signal_enc;
    let mmio = env.backend.mmio();

    read_mfc_status(
        &mut cmd,
        &mmio,
        &resources.status,
        record_offset(ctx.picture.store_data),
    );

    if ctx.picture.brc_num_pak_passes == 1 {
        if brc_enabled {
            read_brc_pak_statistics(
                &mut cmd,
                &mmio,
                &resources.brc.pak_statistics,
                pass,
                ctx.picture.brc_num_pak_passes,
            );
            PictureStateEndShim::apply(env.backend, &resources.mpu_tpu.picture_state)?;
        }
        end_status(&mut cmd, ctx, &resources.status);

        let (wait, signal) = if brc_enabled {
            (
                pass == 0 || pass == repak,
                pass + 1 == num_passes || (pass == num_passes && signal_enc),
            )
        } else {
            (
                true,
                signal_enc && (pass == 0 || ctx.sequence.parameters.gop_pic_size >= 1),
            )
        };
        submit_video(env.backend, cmd, wait, signal)?;
    } else if brc_enabled
        && ((pass < num_passes && repak > 0) || (pass <= num_passes && repak == 0))
    {
        execute_slice_level_brc(env, ctx, cmd)?;
    } else {
        if brc_enabled {
            read_brc_pak_statistics(
                &mut cmd,
                &mmio,
                &resources.brc.pak_statistics,
                pass,
                ctx.picture.brc_num_pak_passes,
            );
        }
        PictureStateEndShim::apply(env.backend, &resources.mpu_tpu.picture_state)?;
        end_status(&mut cmd, ctx, &resources.status);
        submit_video(env.backend, cmd, true, signal_enc)?;
    }

    if tpu_runs_after(pass, num_passes, repak) {
        debug!("running TPU after pass {}", pass);
        env.backend.set_gpu_context(GpuContext::Render)?;
        env.backend.engine_wait(GpuContext::Render, GpuContext::Video)?;
        tpu::run(env, ctx)?;
        env.backend.engine_signal(GpuContext::Render)?;
        env.backend.set_gpu_context(GpuContext::Video)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::Backend;

    #[test]
    fn test_encoder_cfg_offset() {
        assert_eq!(encoder_cfg_offset(0, 0), 0);
        assert_eq!(encoder_cfg_offset(2, 0), 256);
        assert_eq!(encoder_cfg_offset(1, 3), 128);
        assert_eq!(encoder_cfg_offset(3, 3), 0);
    }

    #[test]
    fn test_tpu_runs_after() {
        // Single pass frame without RePAK.
        assert!(tpu_runs_after(0, 0, 0));
        // RePAK as second pass.
        assert!(tpu_runs_after(0, 1, 1));
        assert!(!tpu_runs_after(1, 1, 1));
        // Multi-pass bitrate control followed by RePAK.
        assert!(!tpu_runs_after(1, 4, 4));
        assert!(tpu_runs_after(3, 4, 4));
        // Multi-pass bitrate control without RePAK.
        assert!(!tpu_runs_after(2, 3, 0));
        assert!(tpu_runs_after(3, 3, 0));
    }

    #[test]
    fn test_picture_state_end_shim() {
        let mut backend = Backend::default();
        let picture_state = backend.allocate_buffer("Picture state", 340).unwrap();

        PictureStateEndShim::apply(&mut backend, &picture_state).unwrap();
        let data = backend.resource_data(&picture_state);
        assert_eq!(&data[152..156], &[0x00, 0x00, 0x00, 0x05]);
        assert!(data[..152].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_picture_state_end_shim_lock_failure() {
        let _ = env_logger::try_init();

        let mut backend = Backend::default();
        let picture_state = backend.allocate_buffer("Picture state", 340).unwrap();
        backend.fail_lock_of("Picture state");

        assert!(matches!(
            PictureStateEndShim::apply(&mut backend, &picture_state),
            Err(StatelessBackendError::LockFailed("picture state"))
        ));
    }

    #[test]
    fn test_brc_pak_statistics_layout() {
        let mmio = MfxMmioRegisters {
            bitstream_byte_count: 0x10,
            dq_index: 0x20,
            d_loop_filter: 0x24,
            cumulative_dq_index01: 0x30,
            ..Default::default()
        };

        let mut first = CommandBuffer::new();
        read_brc_pak_statistics(&mut first, &mmio, &1u32, 0, 2);
        assert_eq!(first.commands()[0], Command::FlushDw);
        assert_eq!(
            first.commands()[1],
            Command::StoreDataImm {
                buffer: 1,
                offset: 8,
                value: 0x100,
            }
        );
        assert!(first.commands().contains(&Command::StoreRegisterMem {
            register: 0x30,
            buffer: 1,
            offset: 16,
        }));

        // No pass number past the bitrate control passes, no first pass snapshot after pass 0.
        let mut later = CommandBuffer::new();
        read_brc_pak_statistics(&mut later, &mmio, &1u32, 2, 2);
        assert_eq!(later.len(), first.len() - 2);
        assert!(!later.commands().iter().any(|c| matches!(
            c,
            Command::StoreDataImm { .. } | Command::StoreRegisterMem { offset: 16, .. }
        )));
    }
}
