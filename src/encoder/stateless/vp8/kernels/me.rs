// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use log::trace;

use crate::encoder::stateless::vp8::curbe::MeCurbeParams;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::reference_slots;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::vp8::ReferenceEntry;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::stateless::WalkerParams;
use crate::encoder::stateless::WalkerPattern;

/// Runs the hierarchical motion search. The first call of a frame with 16x ME enabled searches
/// the 16x downscaled pictures, every other call the 4x downscaled ones.
pub fn run<B, C>(env: &mut KernelEnv<B, C>, ctx: &mut EncodeContext<B::Resource>) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let kernel = KernelId::Me;
    let geometry = ctx.sequence.geometry;
    let picture = &ctx.picture;
    let use_16x = picture.me_16x_enabled && !picture.me_16x_done;
    let ref_frame_ctrl = picture.ref_frame_ctrl;

    env.backend.set_perf_tag(PerfTag::Me);

    let curbe = env.builder.me_curbe(&MeCurbeParams {
        frame_width: geometry.frame_width,
        frame_height: geometry.frame_height,
        kernel_mode: ctx.sequence.kernel_mode,
        me_16x_enabled: picture.me_16x_enabled,
        use_16x,
        ref_frame_ctrl,
    });
    env.assign_and_load(kernel, &curbe)?;

    let resources = env.resources;
    if picture.init_brc_distortion && !use_16x {
        resources.clear_brc_distortion(env.backend, &geometry)?;
    }

    let bt = env.builder.binding_tables().me;

    let mv_data = if use_16x {
        resources.me_16x_mv_data.as_ref()
    } else {
        resources.me_4x_mv_data.as_ref()
    }
    .ok_or(EncodeError::NullInterface("ME MV data"))?;
    env.bind_2d(kernel, bt.mv_data, mv_data, true)?;

    if picture.me_16x_enabled {
        let mv_data_16x = resources
            .me_16x_mv_data
            .as_ref()
            .ok_or(EncodeError::NullInterface("16x ME MV data"))?;
        env.bind_2d(kernel, bt.mv_data_16x, mv_data_16x, true)?;
    }

    if !use_16x {
        let distortion = resources
            .me_4x_distortion
            .as_ref()
            .ok_or(EncodeError::NullInterface("ME distortion"))?;
        env.bind_2d(kernel, bt.distortion, distortion, true)?;

        let brc_distortion = match (&resources.brc.distortion, ctx.sequence.brc_enabled) {
            (Some(brc_distortion), true) => brc_distortion,
            _ => distortion,
        };
        env.bind_2d(kernel, bt.min_dist_brc, brc_distortion, true)?;
    }

    let scaled = |entry: &ReferenceEntry<B::Resource>| {
        if use_16x {
            entry.scaled_16x.clone()
        } else {
            entry.scaled_4x.clone()
        }
        .ok_or(EncodeError::NullInterface("scaled reference surface"))
    };

    let current = scaled(ctx.references.get(picture.parameters.curr_reconstructed_pic)?)?;
    env.bind_vme(kernel, bt.inter_pred, &current)?;

    let roles = [
        picture.parameters.last_ref_pic,
        picture.parameters.golden_ref_pic,
        picture.parameters.alt_ref_pic,
    ];
    for (role, slot) in roles.into_iter().zip(reference_slots(ref_frame_ctrl)) {
        let Some(slot) = slot else {
            continue;
        };
        if !role.is_valid() {
            continue;
        }

        let surface = scaled(ctx.references.get(role)?)?;
        env.bind_vme(kernel, bt.refs[slot], &surface)?;
    }

    let (resolution_x, resolution_y) = if use_16x {
        (
            geometry.downscaled_width_in_mb_16x,
            geometry.downscaled_height_in_mb_16x,
        )
    } else {
        (
            geometry.downscaled_width_in_mb_4x,
            geometry.downscaled_height_in_mb_4x,
        )
    };
    let walker = WalkerParams {
        resolution_x,
        resolution_y,
        pattern: WalkerPattern::NoDependency,
        use_scoreboard: false,
    };
    env.submit(kernel, Some(walker), true)?;

    if use_16x {
        trace!("16x ME done");
        ctx.picture.me_16x_done = true;
    }

    Ok(())
}
