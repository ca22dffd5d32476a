// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::encoder::stateless::vp8::curbe::ScalingCurbeParams;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::kernels::KernelEnv;
use crate::encoder::stateless::vp8::EncodeContext;
use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::KernelId;
use crate::encoder::stateless::PerfTag;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::stateless::WalkerParams;
use crate::encoder::stateless::WalkerPattern;
use crate::utils::mbs_from_pixels;

/// Downscales the current picture by 4, or its 4x downscaled version by another 4 when
/// `use_16x` is set. The output surface lives with the current picture so later frames can use
/// it as a motion search reference.
pub fn run<B, C>(
    env: &mut KernelEnv<B, C>,
    ctx: &mut EncodeContext<B::Resource>,
    use_16x: bool,
) -> EncodeResult<()>
where
    B: StatelessVP8EncoderBackend,
    C: Vp8CurbeBuilder,
{
    let kernel = KernelId::Scaling;
    let geometry = ctx.sequence.geometry;
    env.backend.set_perf_tag(PerfTag::Scaling);

    let (input_width, input_height, output_width, output_height) = if use_16x {
        (
            geometry.downscaled_width_4x(),
            geometry.downscaled_height_4x(),
            geometry.downscaled_width_16x(),
            geometry.downscaled_height_16x(),
        )
    } else {
        (
            geometry.frame_width,
            geometry.frame_height,
            geometry.downscaled_width_4x(),
            geometry.downscaled_height_4x(),
        )
    };

    let recon = ctx.picture.parameters.curr_reconstructed_pic;
    let raw = ctx.picture.raw_surface.clone();
    let entry = ctx.references.get_mut(recon)?;

    let (src, dst) = if use_16x {
        let src = entry
            .scaled_4x
            .clone()
            .ok_or(EncodeError::NullInterface("4x scaled surface"))?;
        let dst = match entry.scaled_16x.clone() {
            Some(surface) => surface,
            None => {
                let surface =
                    env.backend
                        .allocate_surface("16x scaled surface", output_width, output_height)?;
                entry.scaled_16x = Some(surface.clone());
                surface
            }
        };
        (src, dst)
    } else {
        let dst = match entry.scaled_4x.clone() {
            Some(surface) => surface,
            None => {
                let surface =
                    env.backend
                        .allocate_surface("4x scaled surface", output_width, output_height)?;
                entry.scaled_4x = Some(surface.clone());
                surface
            }
        };
        (raw, dst)
    };

    let curbe = env.builder.scaling_curbe(&ScalingCurbeParams {
        input_width,
        input_height,
    });
    env.assign_and_load(kernel, &curbe)?;

    let bt = env.builder.binding_tables().scaling;
    env.bind_2d(kernel, bt.src_y, &src, false)?;
    env.bind_2d(kernel, bt.dst_y, &dst, true)?;

    let walker = WalkerParams {
        resolution_x: mbs_from_pixels(output_width) * 2,
        resolution_y: mbs_from_pixels(output_height) * 2,
        pattern: WalkerPattern::NoDependency,
        use_scoreboard: false,
    };
    env.submit(kernel, Some(walker), true)
}
