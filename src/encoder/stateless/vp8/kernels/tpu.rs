// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::encoder::stateless::vp8::curbe::TpuCurbeParams;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::mpu::header_metadata;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::resources::COEFF_PROBS_SIZE;
use crate::encoder::stateless::vp8::resources::ENTROPY_COST_TABLE_SIZE;
use crate::encoder::stateless::vp8::resources::FRAME_HEADER_SIZE;
use crate::encoder::stateless::vp8::resources::HEADER_METADATA_SIZE;
use crate::encoder::stateless::vp8::resources::PICTURE_STATE_SIZE;
use crate::encoder::stateless::vp8::resources::REPAK_DECISION_SIZE;
use crate::encoder::stateless::vp8::resources::TOKEN_BITS_DATA_SIZE;
use crate::encoder::stateless::vp8::resources::TOKEN_STATISTICS_SIZE;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessVP8EncoderBackend;

/// Runs the token probability update kernel. It reads the token statistics of the last PAK
/// pass, writes the probabilities of the RePAK pass and decides whether that pass runs.
pub fn run<B, C>(env: &mut KernelEnv<B, C>, ctx: &mut EncodeContext<B::Resource>) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let kernel = KernelId::Tpu;
    let resources = env.resources;
    let geometry = ctx.sequence.geometry;
    let picture = &ctx.picture;
    let repak = picture.policy.repak_pass_iter;

    env.backend.set_perf_tag(PerfTag::Tpu);

    if picture.tpu_curbe.set_in_brc_update() {
        env.dispatch.reuse_curbe(env.backend, env.builder, kernel)?;
    } else {
        let curbe = env.builder.tpu_curbe(&TpuCurbeParams {
            picture: &picture.parameters,
            quant: &picture.quant,
            frame_width_in_mb: geometry.width_in_mb,
            frame_height_in_mb: geometry.height_in_mb,
            rebinarization_frame_hdr: repak > 0,
            adaptive_repak: repak > 0 && env.config.adaptive_repak_supported,
            max_pak_passes: picture.brc_num_pak_passes,
        });
        env.assign_and_load(kernel, &curbe)?;
    }

    let bt = env.builder.binding_tables().tpu;
    let mpu_tpu = &resources.mpu_tpu;
    let (metadata, metadata_offset) = header_metadata(resources, ctx.sequence.brc_enabled);

    let bindings = [
        (bt.pak_token_statistics, &mpu_tpu.pak_token_statistics, 0, TOKEN_STATISTICS_SIZE, false),
        (bt.token_update_flags, &mpu_tpu.pak_token_update_flags, 0, COEFF_PROBS_SIZE, false),
        (bt.entropy_cost, &mpu_tpu.entropy_cost_table, 0, ENTROPY_COST_TABLE_SIZE, false),
        (bt.header_bitstream, &resources.frame_header, 0, FRAME_HEADER_SIZE, true),
        (bt.default_token_probability, &mpu_tpu.default_token_probability, 0, COEFF_PROBS_SIZE, false),
        (bt.picture_state, &mpu_tpu.picture_state, 0, PICTURE_STATE_SIZE, true),
        (bt.mpu_curbe_data, &mpu_tpu.token_bits_data, 0, TOKEN_BITS_DATA_SIZE, false),
        (bt.header_metadata, metadata, metadata_offset, HEADER_METADATA_SIZE, true),
        (bt.token_probability, &mpu_tpu.coeff_probs, 0, COEFF_PROBS_SIZE, true),
        (bt.pak_hw_pass1_probability, &mpu_tpu.ref_coeff_probs, 0, COEFF_PROBS_SIZE, true),
        (bt.key_frame_token_probability, &mpu_tpu.key_frame_token_probability, 0, COEFF_PROBS_SIZE, false),
        (bt.updated_token_probability, &mpu_tpu.updated_token_probability, 0, COEFF_PROBS_SIZE, true),
        (bt.pak_hw_pass2_probability, &mpu_tpu.hw_token_probability_pass2, 0, COEFF_PROBS_SIZE, true),
        (bt.repak_decision, &mpu_tpu.repak_decision, 0, REPAK_DECISION_SIZE, true),
    ];
    for (index, resource, offset, size, writable) in bindings {
        env.bind_buffer(kernel, index, resource, offset, size, writable)?;
    }

    env.submit(kernel, None, true)
}
