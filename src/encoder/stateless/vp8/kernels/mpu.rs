// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::encoder::stateless::vp8::curbe::MpuCurbeParams;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::resources::COEFF_PROBS_SIZE;
use crate::encoder::stateless::vp8::resources::ENTROPY_COST_TABLE_SIZE;
use crate::encoder::stateless::vp8::resources::FRAME_HEADER_SIZE;
use crate::encoder::stateless::vp8::resources::HEADER_METADATA_OFFSET;
use crate::encoder::stateless::vp8::resources::HEADER_METADATA_SIZE;
use crate::encoder::stateless::vp8::resources::HISTOGRAM_SIZE;
use crate::encoder::stateless::vp8::resources::MODE_COST_UPDATE_SIZE;
use crate::encoder::stateless::vp8::resources::MODE_PROBS_SIZE;
use crate::encoder::stateless::vp8::resources::MPU_BITSTREAM_SIZE;
use crate::encoder::stateless::vp8::resources::PICTURE_STATE_SIZE;
use crate::encoder::stateless::vp8::resources::TOKEN_BITS_DATA_SIZE;
use crate::encoder::stateless::vp8::resources::Vp8Resources;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::EncoderCfgParams;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessVP8EncoderBackend;

/// Buffer and offset holding the header metadata of the frame: the encoder configuration
/// written by the bitrate control, or the copy kept after the picture state otherwise.
pub(crate) fn header_metadata<R>(resources: &Vp8Resources<R>, brc_enabled: bool) -> (&R, u32) {
    if brc_enabled {
        (&resources.brc.encoder_cfg_write, 0)
    } else {
        (
            &resources.mpu_tpu.picture_state,
            HEADER_METADATA_OFFSET as u32,
        )
    }
}

/// Runs the mode probability update kernel, which also produces the frame header.
pub fn run<B, C>(env: &mut KernelEnv<B, C>, ctx: &mut EncodeContext<B::Resource>) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let kernel = KernelId::Mpu;
    let resources = env.resources;
    let sequence = &ctx.sequence;
    let picture = &ctx.picture;

    env.backend.set_perf_tag(PerfTag::Mpu);

    if picture.frame_type.is_intra() {
        resources.key_frame_update_mpu_tpu(env.backend)?;
    }

    if !picture.encoder_cfg_initialized {
        env.backend.init_encoder_cfg(
            &resources.mpu_tpu.picture_state,
            HEADER_METADATA_OFFSET,
            &EncoderCfgParams {
                sequence: &sequence.parameters,
                picture: &picture.parameters,
                quant: &picture.quant,
                first_pass: ctx.pass.current_pass == 0,
                brc_enabled: sequence.brc_enabled,
                cfg_buffer_size: PICTURE_STATE_SIZE,
            },
        )?;
    }

    if picture.mpu_curbe.set_in_brc_update() {
        env.dispatch.reuse_curbe(env.backend, env.builder, kernel)?;
    } else {
        let curbe = env.builder.mpu_curbe(&MpuCurbeParams {
            sequence: &sequence.parameters,
            picture: &picture.parameters,
            quant: &picture.quant,
            max_pak_passes: picture.brc_num_pak_passes,
        });
        env.assign_and_load(kernel, &curbe)?;
    }

    let bt = env.builder.binding_tables().mpu;
    let mpu_tpu = &resources.mpu_tpu;

    env.bind_buffer(kernel, bt.histogram, &resources.histogram, 0, HISTOGRAM_SIZE, true)?;
    env.bind_buffer(
        kernel,
        bt.ref_mode_probability,
        &mpu_tpu.ref_mode_probs,
        0,
        MODE_PROBS_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.curr_mode_probability,
        &mpu_tpu.mode_probs,
        0,
        MODE_PROBS_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.ref_token_probability,
        &mpu_tpu.ref_coeff_probs,
        0,
        COEFF_PROBS_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.curr_token_probability,
        &mpu_tpu.coeff_probs,
        0,
        COEFF_PROBS_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.header_bitstream,
        &resources.frame_header,
        0,
        FRAME_HEADER_SIZE,
        true,
    )?;

    let (metadata, metadata_offset) = header_metadata(resources, sequence.brc_enabled);
    env.bind_buffer(
        kernel,
        bt.header_metadata,
        metadata,
        metadata_offset,
        HEADER_METADATA_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.picture_state,
        &mpu_tpu.picture_state,
        0,
        PICTURE_STATE_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.mpu_bitstream,
        &mpu_tpu.mpu_bitstream,
        0,
        MPU_BITSTREAM_SIZE,
        true,
    )?;
    env.bind_buffer(
        kernel,
        bt.token_bits_data,
        &mpu_tpu.token_bits_data,
        0,
        TOKEN_BITS_DATA_SIZE,
        false,
    )?;
    env.bind_buffer(
        kernel,
        bt.entropy_cost,
        &mpu_tpu.entropy_cost_table,
        0,
        ENTROPY_COST_TABLE_SIZE,
        false,
    )?;
    env.bind_buffer(
        kernel,
        bt.mode_cost_update,
        &resources.mode_cost_update,
        0,
        MODE_COST_UPDATE_SIZE,
        true,
    )?;

    env.submit(kernel, None, true)
}
