// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::encoder::CodecFunction;
use crate::encoder::FrameType;
use crate::encoder::RateControlMethod;
use crate::Resolution;

pub struct VP8;

/// Maximum number of temporal layers of a sequence.
pub const MAX_TEMPORAL_LAYERS: usize = 4;
/// Number of segments a VP8 frame can be split into.
pub const MAX_SEGMENTS: usize = 4;
/// Number of picture indices addressable by a [`PictureId`].
pub const NUM_PICTURE_IDS: usize = 128;

/// Reference frame control flags.
pub const LAST_REF_FLAG: u8 = 0x01;
pub const GOLDEN_REF_FLAG: u8 = 0x02;
pub const ALT_REF_FLAG: u8 = 0x04;

/// Indices of [`QuantData::q_index_delta`].
pub const QINDEX_Y1_DC: usize = 0;
pub const QINDEX_Y2_DC: usize = 1;
pub const QINDEX_Y2_AC: usize = 2;
pub const QINDEX_UV_DC: usize = 3;
pub const QINDEX_UV_AC: usize = 4;

/// Largest VP8 quantizer index.
pub const QP_MAX: i32 = 127;

/// Index of a picture in the reference list of the encoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PictureId(pub u8);

impl PictureId {
    pub const INVALID: PictureId = PictureId(NUM_PICTURE_IDS as u8);

    pub fn is_valid(&self) -> bool {
        usize::from(self.0) < NUM_PICTURE_IDS
    }

    pub fn index(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for PictureId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Sequence level parameters, supplied once per sequence and again on every change.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceParameters {
    pub frame_width: u16,
    pub frame_height: u16,
    /// Horizontal upscaling code written into the frame header.
    pub frame_width_scale: u8,
    /// Vertical upscaling code written into the frame header.
    pub frame_height_scale: u8,
    /// Distance between key frames. Zero means only the first frame is a key frame.
    pub gop_pic_size: u32,
    /// Quality/speed trade-off in the 0-7 range, 1 being the best quality.
    pub target_usage: u8,
    pub rate_control_method: RateControlMethod,
    /// Target bitrate of each temporal layer, in kbps.
    pub target_bit_rate: [u32; MAX_TEMPORAL_LAYERS],
    /// Maximum bitrate in kbps.
    pub max_bit_rate: u32,
    /// Minimum bitrate in kbps.
    pub min_bit_rate: u32,
    /// Frame rate of each temporal layer, in frames per 100 seconds.
    pub frames_per_100_sec: [u32; MAX_TEMPORAL_LAYERS],
    /// Zero lets the bitrate control pick 7/8 of the buffer size.
    pub init_vbv_buffer_fullness_in_bit: u32,
    pub vbv_buffer_size_in_bit: u32,
    pub num_temporal_layers_minus1: u8,
    /// Requests a bitrate control reset before the next frame.
    pub reset_brc: bool,
    /// Use the raw input of the last reference instead of its reconstruction for motion search.
    pub use_raw_recon_ref: bool,
    /// Macroblock level rate control: 0 lets the driver decide, 1 enables, 2 disables.
    pub mbbrc: u8,
}

impl Default for SequenceParameters {
    fn default() -> Self {
        Self {
            frame_width: 320,
            frame_height: 240,
            frame_width_scale: 0,
            frame_height_scale: 0,
            gop_pic_size: 30,
            target_usage: 4,
            rate_control_method: RateControlMethod::Cqp,
            target_bit_rate: [0; MAX_TEMPORAL_LAYERS],
            max_bit_rate: 0,
            min_bit_rate: 0,
            frames_per_100_sec: [3000; MAX_TEMPORAL_LAYERS],
            init_vbv_buffer_fullness_in_bit: 0,
            vbv_buffer_size_in_bit: 0,
            num_temporal_layers_minus1: 0,
            reset_brc: false,
            use_raw_recon_ref: false,
            mbbrc: 0,
        }
    }
}

impl SequenceParameters {
    pub fn resolution(&self) -> Resolution {
        Resolution::from((u32::from(self.frame_width), u32::from(self.frame_height)))
    }

    pub fn num_temporal_layers(&self) -> usize {
        usize::from(self.num_temporal_layers_minus1) + 1
    }
}

/// Picture level parameters, supplied for every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PictureParameters {
    pub curr_original_pic: PictureId,
    pub curr_reconstructed_pic: PictureId,
    pub last_ref_pic: PictureId,
    pub golden_ref_pic: PictureId,
    pub alt_ref_pic: PictureId,

    pub frame_type: FrameType,
    /// VP8 version field, selecting the reconstruction and loop filters.
    pub version: u8,
    pub show_frame: bool,
    pub color_space: u8,
    pub clamping_type: u8,

    pub segmentation_enabled: bool,
    pub update_mb_segmentation_map: bool,
    pub update_segment_feature_data: bool,

    pub filter_type: u8,
    pub sharpness_level: u8,
    pub loop_filter_adj_enable: bool,
    pub mb_no_coeff_skip: bool,
    pub forced_lf_adjustment: bool,
    pub loop_filter_level: [u8; MAX_SEGMENTS],
    pub ref_lf_delta: [i8; 4],
    pub mode_lf_delta: [i8; 4],

    pub refresh_golden_frame: bool,
    pub refresh_alternate_frame: bool,
    pub copy_buffer_to_golden: u8,
    pub copy_buffer_to_alternate: u8,
    pub refresh_last: bool,
    pub sign_bias_golden: bool,
    pub sign_bias_alternate: bool,
    pub refresh_entropy_probs: bool,

    /// Bitmask of [`LAST_REF_FLAG`], [`GOLDEN_REF_FLAG`] and [`ALT_REF_FLAG`] the client allows
    /// for prediction. The mask actually used is derived by the encoder and never written back.
    pub ref_frame_ctrl: u8,
    /// Preferred references (1 last, 2 golden, 3 alt) when temporal layers are in use.
    pub first_ref: u8,
    pub second_ref: u8,
    pub temporal_id: u8,

    /// Log2 of the number of DCT token partitions.
    pub coded_coeff_token_partition: u8,
    pub clamp_qindex_low: u8,
    pub clamp_qindex_high: u8,

    /// Number the status report of this frame will carry.
    pub status_report_feedback_number: u32,
}

impl Default for PictureParameters {
    fn default() -> Self {
        Self {
            curr_original_pic: PictureId(0),
            curr_reconstructed_pic: PictureId(0),
            last_ref_pic: PictureId::INVALID,
            golden_ref_pic: PictureId::INVALID,
            alt_ref_pic: PictureId::INVALID,
            frame_type: FrameType::Intra,
            version: 0,
            show_frame: true,
            color_space: 0,
            clamping_type: 0,
            segmentation_enabled: false,
            update_mb_segmentation_map: false,
            update_segment_feature_data: false,
            filter_type: 0,
            sharpness_level: 0,
            loop_filter_adj_enable: false,
            mb_no_coeff_skip: true,
            forced_lf_adjustment: false,
            loop_filter_level: [0; MAX_SEGMENTS],
            ref_lf_delta: [0; 4],
            mode_lf_delta: [0; 4],
            refresh_golden_frame: false,
            refresh_alternate_frame: false,
            copy_buffer_to_golden: 0,
            copy_buffer_to_alternate: 0,
            refresh_last: true,
            sign_bias_golden: false,
            sign_bias_alternate: false,
            refresh_entropy_probs: false,
            ref_frame_ctrl: 0,
            first_ref: 0,
            second_ref: 0,
            temporal_id: 0,
            coded_coeff_token_partition: 0,
            clamp_qindex_low: 0,
            clamp_qindex_high: QP_MAX as u8,
            status_report_feedback_number: 0,
        }
    }
}

/// Quantizer indices of the frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuantData {
    /// Base quantizer index of each segment.
    pub q_index: [u8; MAX_SEGMENTS],
    /// Deltas applied on top of the base index, indexed by the `QINDEX_*` constants.
    pub q_index_delta: [i8; 5],
}

impl QuantData {
    /// Quantizer index of `segment` for the plane selected by `delta`, clipped to the valid range.
    pub fn clipped_index(&self, segment: usize, delta: usize) -> u8 {
        let value = i32::from(self.q_index[segment]) + i32::from(self.q_index_delta[delta]);
        crate::utils::clip3(0, QP_MAX, value) as u8
    }
}

#[derive(Clone)]
pub struct EncoderConfig {
    pub resolution: Resolution,
    /// Hierarchical (4x downscaled) motion estimation is available.
    pub hme_supported: bool,
    /// 16x downscaled motion estimation is available. Ignored without `hme_supported`.
    pub me_16x_supported: bool,
    pub repak_supported: bool,
    /// The TPU kernel may decide the RePAK pass is not worth running.
    pub adaptive_repak_supported: bool,
    pub multipass_brc_supported: bool,
    /// Run the intra distortion pre-pass on key frames for the bitrate control.
    pub brc_distortion_buffer_supported: bool,
    pub brc_constant_buffer_supported: bool,
    pub use_hw_scoreboard: bool,
    /// Skip writing the reconstructed picture of frames never used as reference.
    pub suppress_recon_pic_supported: bool,
    pub codec_function: CodecFunction,
    /// Input of the bitrate control pass count selection.
    pub brc_precision: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        // Artificially encoder configuration with intent to be widely supported.
        Self {
            resolution: Resolution {
                width: 320,
                height: 240,
            },
            hme_supported: true,
            me_16x_supported: true,
            repak_supported: true,
            adaptive_repak_supported: true,
            multipass_brc_supported: false,
            brc_distortion_buffer_supported: true,
            brc_constant_buffer_supported: true,
            use_hw_scoreboard: true,
            suppress_recon_pic_supported: true,
            codec_function: CodecFunction::EncPak,
            brc_precision: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_id_validity() {
        assert!(PictureId(0).is_valid());
        assert!(PictureId(127).is_valid());
        assert!(!PictureId(128).is_valid());
        assert!(!PictureId::INVALID.is_valid());
        assert!(!PictureId(0xff).is_valid());
        assert_eq!(PictureId::default(), PictureId::INVALID);
    }

    #[test]
    fn test_clipped_index() {
        let quant = QuantData {
            q_index: [10, 127, 0, 64],
            q_index_delta: [5, -3, 0, -20, 15],
        };

        assert_eq!(quant.clipped_index(0, QINDEX_Y1_DC), 15);
        assert_eq!(quant.clipped_index(1, QINDEX_Y1_DC), 127);
        assert_eq!(quant.clipped_index(2, QINDEX_UV_DC), 0);
        assert_eq!(quant.clipped_index(3, QINDEX_UV_AC), 79);
        assert_eq!(quant.clipped_index(1, QINDEX_Y2_DC), 124);
    }
}
