// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Curbe layouts of the Gen9 VP8 encoding kernels.

pub(crate) mod tables;

use byteorder::ByteOrder;
use byteorder::LittleEndian;

use crate::encoder::stateless::vp8::curbe::BindingTables;
use crate::encoder::stateless::vp8::curbe::BrcInitResetBindingTable;
use crate::encoder::stateless::vp8::curbe::BrcInitResetCurbeParams;
use crate::encoder::stateless::vp8::curbe::BrcUpdateBindingTable;
use crate::encoder::stateless::vp8::curbe::BrcUpdateCurbeParams;
use crate::encoder::stateless::vp8::curbe::CurbeWriter;
use crate::encoder::stateless::vp8::curbe::KernelLayout;
use crate::encoder::stateless::vp8::curbe::MbEncBindingTable;
use crate::encoder::stateless::vp8::curbe::MbEncCurbeParams;
use crate::encoder::stateless::vp8::curbe::MeBindingTable;
use crate::encoder::stateless::vp8::curbe::MeCurbeParams;
use crate::encoder::stateless::vp8::curbe::MpuBindingTable;
use crate::encoder::stateless::vp8::curbe::MpuCurbeParams;
use crate::encoder::stateless::vp8::curbe::ScalingBindingTable;
use crate::encoder::stateless::vp8::curbe::ScalingCurbeParams;
use crate::encoder::stateless::vp8::curbe::TpuBindingTable;
use crate::encoder::stateless::vp8::curbe::TpuCurbeParams;
use crate::encoder::stateless::vp8::curbe::TpuPakStatsLayout;
use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::curbe::temporal_layer_main_ref;
use crate::encoder::stateless::KernelId;
use crate::encoder::vp8::PictureParameters;
use crate::encoder::vp8::SequenceParameters;
use crate::encoder::vp8::MAX_SEGMENTS;
use crate::encoder::vp8::QINDEX_UV_AC;
use crate::encoder::vp8::QINDEX_UV_DC;
use crate::encoder::vp8::QINDEX_Y1_DC;
use crate::encoder::vp8::QINDEX_Y2_AC;
use crate::encoder::vp8::QINDEX_Y2_DC;
use crate::encoder::FrameType;
use crate::encoder::KernelMode;
use crate::utils::align_up;
use crate::utils::MB_SIZE;

use tables::*;

const SCALING_CURBE_DWORDS: usize = 12;
const ME_CURBE_DWORDS: usize = 38;
const MBENC_I_CURBE_DWORDS: usize = 45;
const MBENC_P_CURBE_DWORDS: usize = 98;
const BRC_INIT_RESET_CURBE_DWORDS: usize = 28;
const BRC_UPDATE_CURBE_DWORDS: usize = 35;
const MPU_CURBE_DWORDS: usize = 25;
const TPU_CURBE_DWORDS: usize = 27;

const SCALING_NUM_SURFACES: usize = 7;
const ME_NUM_SURFACES: usize = 11;
const MBENC_NUM_SURFACES: usize = 19;
const BRC_INIT_RESET_NUM_SURFACES: usize = 2;
const BRC_UPDATE_NUM_SURFACES: usize = 14;
const MPU_NUM_SURFACES: usize = 13;
const TPU_NUM_SURFACES: usize = 15;

const SCALING_FLATNESS_BTI: u32 = 4;
const SCALING_MBVPROC_BTI: u32 = 6;

const ALL_DC_BIAS_DEFAULT: u32 = 1500;

const ME16X_BEFORE_ME4X: u32 = 0;
const ME4X_ONLY: u32 = 2;
const ME4X_AFTER_ME16X: u32 = 3;

/// Binding table layout of the Gen9 kernels.
pub const BINDING_TABLES: BindingTables = BindingTables {
    scaling: ScalingBindingTable { src_y: 0, dst_y: 1 },
    me: MeBindingTable {
        mv_data: 0,
        mv_data_16x: 2,
        distortion: 3,
        min_dist_brc: 4,
        inter_pred: 5,
        refs: [6, 8, 10],
    },
    mbenc: MbEncBindingTable {
        per_mb_out: 0,
        curr_y: 1,
        curr_uv: 2,
        mb_mode_cost_luma: 3,
        block_mode_cost: 4,
        chroma_recon: 5,
        segmentation_map: 6,
        histogram: 7,
        i_vme_debug_streamout: 8,
        vme: 9,
        idist: 10,
        curr_y_downscaled: 11,
        vme_coarse_intra: 12,
        mv_data_from_me: 3,
        ind_mv_data: 4,
        ref_mb_count: 5,
        inter_pred: 8,
        refs: [9, 11, 13],
        per_mb_quant: 14,
        inter_pred_distortion: 15,
        per_mv_data: 16,
        mode_cost_update: 17,
        p_vme_debug_streamout: 18,
    },
    brc_init_reset: BrcInitResetBindingTable {
        history: 0,
        distortion: 1,
    },
    brc_update: BrcUpdateBindingTable {
        history: 1,
        pak_statistics: 2,
        encoder_cfg_read: 3,
        encoder_cfg_write: 4,
        mbenc_curbe_read: 5,
        mbenc_curbe_write: 6,
        distortion: 7,
        constant_data: 8,
        segment_map: 9,
        mpu_curbe_read: 10,
        mpu_curbe_write: 11,
        tpu_curbe_read: 12,
        tpu_curbe_write: 13,
    },
    mpu: MpuBindingTable {
        histogram: 0,
        ref_mode_probability: 1,
        curr_mode_probability: 2,
        ref_token_probability: 3,
        curr_token_probability: 4,
        header_bitstream: 5,
        header_metadata: 6,
        picture_state: 7,
        mpu_bitstream: 8,
        token_bits_data: 9,
        vme_debug_streamout: 10,
        entropy_cost: 11,
        mode_cost_update: 12,
    },
    tpu: TpuBindingTable {
        pak_token_statistics: 0,
        token_update_flags: 1,
        entropy_cost: 2,
        header_bitstream: 3,
        default_token_probability: 4,
        picture_state: 5,
        mpu_curbe_data: 6,
        header_metadata: 7,
        token_probability: 8,
        pak_hw_pass1_probability: 9,
        key_frame_token_probability: 10,
        updated_token_probability: 11,
        pak_hw_pass2_probability: 12,
        vme_debug_streamout: 13,
        repak_decision: 14,
    },
};

fn search_path(kernel_mode: KernelMode) -> &'static [u8; 56] {
    match kernel_mode {
        KernelMode::Normal => &DIAMOND,
        KernelMode::Quality | KernelMode::Performance => &FULL_SPIRAL_48X40,
    }
}

fn by_mode(kernel_mode: KernelMode, normal: u32, performance: u32, quality: u32) -> u32 {
    match kernel_mode {
        KernelMode::Normal => normal,
        KernelMode::Performance => performance,
        KernelMode::Quality => quality,
    }
}

fn aligned_frame_size(sequence: &SequenceParameters) -> u32 {
    let width = align_up(u32::from(sequence.frame_width), MB_SIZE);
    let height = align_up(u32::from(sequence.frame_height), MB_SIZE);
    width | (height << 16)
}

fn main_ref(sequence: &SequenceParameters, picture: &PictureParameters, ref_frame_ctrl: u8) -> u32 {
    if sequence.num_temporal_layers_minus1 > 0 {
        temporal_layer_main_ref(ref_frame_ctrl, picture.first_ref, picture.second_ref)
    } else {
        u32::from(MAINREF_TABLE[usize::from(ref_frame_ctrl & 0x7)])
    }
}

fn cost(qp: u8, index: usize) -> u32 {
    COST_TABLE[usize::from(qp) * 7 + index]
}

/// Deviation thresholds are signed bytes.
fn deviation(coefficient: f64, base: f64, bps_ratio: f64) -> u32 {
    u32::from((coefficient * base.powf(bps_ratio)) as i32 as u8)
}

fn chroma_ac0_threshold(k: u32, ac: u32) -> u32 {
    let value = ((((k << 16) - 1) as f64 / ((1 << 16) / ac) as f64 - ((48 * ac) >> 7) as f64)
        * f64::from(1 << 13)
        + 3400.0)
        / 2217.0;
    u32::from(value as u16)
}

fn chroma_dc_threshold(k: u32, dc: u32) -> u32 {
    let value = (((k << 16) - 1) / ((1 << 16) / dc)) as i32 - ((48 * dc) >> 7) as i32;
    value as u32 & 0xffff
}

/// Curbe builder of the Gen9 kernels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gen9CurbeBuilder;

impl Gen9CurbeBuilder {
    fn mbenc_i_curbe(&self, params: &MbEncCurbeParams) -> CurbeWriter {
        let picture = params.picture;
        let quant = params.quant;
        let mut curbe = CurbeWriter::new(MBENC_I_CURBE_DWORDS);

        curbe.set(0, aligned_frame_size(params.sequence));

        curbe.set_flag(1, 0, false);
        curbe.set_flag(1, 1, picture.segmentation_enabled);
        curbe.set_flag(1, 2, params.kernel_mode == KernelMode::Performance);
        curbe.set_flag(1, 5, true);
        curbe.set_flag(1, 6, true);
        curbe.set_bits(1, 9, 2, 2);

        let num_segments = if picture.segmentation_enabled {
            MAX_SEGMENTS
        } else {
            1
        };

        for segment in 0..num_segments {
            let y_dc = quant.clipped_index(segment, QINDEX_Y1_DC);
            let uv_dc = quant.clipped_index(segment, QINDEX_UV_DC);
            let uv_ac = quant.clipped_index(segment, QINDEX_UV_AC);

            let half = segment / 2;
            let lsb = 16 * (segment as u32 % 2);

            let y_dc_quant = u32::from(QUANT_DC[usize::from(y_dc)]);
            let dc = u32::from(QUANT_DC[usize::from(uv_dc)]);
            let ac = u32::from(QUANT_AC[usize::from(uv_ac)]);

            curbe.set_bits(2 + half, lsb, 16, y_dc_quant * y_dc_quant / 4);
            curbe.set_bits(4 + half, lsb, 16, ALL_DC_BIAS_DEFAULT);
            curbe.set_bits(6 + half, lsb, 16, dc);
            curbe.set_bits(8 + half, lsb, 16, ac);

            curbe.set_bits(10 + segment, 0, 16, chroma_ac0_threshold(1, ac));
            curbe.set_bits(10 + segment, 16, 16, chroma_ac0_threshold(2, ac));

            curbe.set_bits(14 + 2 * segment, 0, 16, chroma_dc_threshold(1, dc));
            curbe.set_bits(14 + 2 * segment, 16, 16, chroma_dc_threshold(2, dc));
            curbe.set_bits(15 + 2 * segment, 0, 16, chroma_dc_threshold(3, dc));
            curbe.set_bits(15 + 2 * segment, 16, 16, chroma_dc_threshold(4, dc));

            let ac1 = (((1 << 16) - 1) / ((1 << 16) / ac)) as i32 - ((48 * ac) >> 7) as i32;
            curbe.set_bits(22 + half, lsb, 16, ac1 as u32);

            let vme_costs = usize::from(y_dc & 0x7f) * 4;
            for i in 0..4 {
                curbe.set_bits(
                    24 + i,
                    8 * segment as u32,
                    8,
                    u32::from(IFRAME_VME_COSTS[vme_costs + i]),
                );
            }
        }

        let bt = &BINDING_TABLES.mbenc;
        curbe.set(32, bt.per_mb_out);
        // The kernel addresses the UV plane through the luma index.
        curbe.set(33, bt.curr_y);
        curbe.set(34, bt.curr_y);
        curbe.set(35, bt.mb_mode_cost_luma);
        curbe.set(36, bt.block_mode_cost);
        curbe.set(37, bt.chroma_recon);
        curbe.set(38, bt.segmentation_map);
        curbe.set(39, bt.histogram);
        curbe.set(40, bt.i_vme_debug_streamout);
        curbe.set(41, bt.vme);
        curbe.set(42, bt.idist);
        curbe.set(43, bt.curr_y_downscaled);
        curbe.set(44, bt.vme_coarse_intra);

        curbe
    }

    fn mbenc_p_curbe(&self, params: &MbEncCurbeParams) -> CurbeWriter {
        let picture = params.picture;
        let quant = params.quant;
        let mode = params.kernel_mode;
        let mut curbe = CurbeWriter::new(MBENC_P_CURBE_DWORDS);

        let qp: [u8; MAX_SEGMENTS] =
            std::array::from_fn(|segment| quant.clipped_index(segment, QINDEX_Y1_DC));

        curbe.set(0, aligned_frame_size(params.sequence));

        curbe.set_flag(1, 0, true);
        curbe.set_bits(1, 1, 2, by_mode(mode, 1, 0, 2));
        curbe.set_flag(1, 3, params.hme_enabled);
        curbe.set_bits(1, 4, 2, 1);
        curbe.set_bits(1, 16, 4, u32::from(params.ref_frame_ctrl));
        curbe.set_flag(1, 20, picture.segmentation_enabled);
        curbe.set_flag(1, 21, true);
        curbe.set_flag(1, 24, true);
        curbe.set_bits(
            1,
            25,
            6,
            main_ref(params.sequence, picture, params.ref_frame_ctrl),
        );

        for (segment, &qp) in qp.iter().enumerate() {
            let lambda = u32::from(QUANT_DC[usize::from(qp)]);
            curbe.set(2 + segment, lambda | ((lambda >> 2) << 16));
        }

        curbe.set_bits(
            6,
            8,
            8,
            u32::from(picture.sign_bias_golden ^ picture.sign_bias_alternate),
        );
        curbe.set_bits(6, 16, 8, u32::from(picture.sign_bias_alternate));
        curbe.set_bits(6, 24, 8, u32::from(picture.sign_bias_golden));

        curbe.set_bits(7, 0, 16, by_mode(mode, 50, 0, 100));
        curbe.set_bits(7, 16, 8, u32::from(picture.temporal_id));

        curbe.set_flag(8, 0, true);
        curbe.set_flag(8, 1, mode != KernelMode::Performance);

        curbe.set_bits(10, 0, 8, by_mode(mode, 25, 9, 57));
        curbe.set_bits(10, 8, 8, 57);

        curbe.set_bits(11, 12, 2, 3);
        curbe.set_bits(11, 20, 2, 2);
        curbe.set_bits(11, 22, 2, 2);

        let (search_width, search_height) = if mode != KernelMode::Performance {
            (48, 40)
        } else {
            (28, 28)
        };
        curbe.set_bits(12, 16, 8, search_width);
        curbe.set_bits(12, 24, 8, search_height);

        curbe.set(13, cost(qp[0], 0));
        curbe.set(14, cost(qp[0], 1));
        curbe.set(15, cost(qp[0], 2));
        curbe.set_bytes(16, search_path(mode));
        curbe.set(30, cost(qp[0], 3));
        curbe.set(31, cost(qp[0], 4));

        curbe.set_bits(32, 0, 8, cost(qp[0], 5));
        curbe.set_bits(32, 8, 8, cost(qp[1], 5));
        curbe.set_bits(33, 0, 16, 8);
        curbe.set_bits(33, 16, 8, cost(qp[2], 5));
        curbe.set_bits(33, 24, 8, cost(qp[3], 5));

        for (i, pair) in MV_REF_COST_CONTEXT.chunks(2).enumerate() {
            curbe.set(34 + i, u32::from(pair[0]) | (u32::from(pair[1]) << 16));
        }

        curbe.set(58, 0x73c << 16);
        curbe.set(59, 0x365 | (0xdc9 << 16));
        curbe.set(60, 516 | (106 << 16));
        curbe.set(61, 2407 | (2409 << 16));

        let avg_key = u32::from(QUANT_DC[usize::from(params.average_key_frame_qp)]);
        let avg_p = u32::from(QUANT_DC[usize::from(params.average_p_frame_qp)]);
        let (last, golden, alt) = match params.frame_position_in_gop {
            1 => (avg_key, avg_key, avg_key),
            2 => (avg_p, avg_key, avg_key),
            3 => (avg_p, avg_p, avg_key),
            _ => (avg_p, avg_p, avg_p),
        };
        curbe.set_bits(62, 0, 8, last);
        curbe.set_bits(62, 8, 8, golden);
        curbe.set_bits(62, 16, 8, alt);

        for (segment, &qp) in qp.iter().enumerate() {
            curbe.set_bits(63, 8 * segment as u32, 8, cost(qp, 6));
        }

        for (segment, &qp) in qp.iter().enumerate().skip(1) {
            let first = 64 + 5 * (segment - 1);
            for i in 0..5 {
                curbe.set(first + i, cost(qp, i));
            }
        }

        let skip_threshold = |qp: u8| NEW_MV_SKIP_THRESHOLD[usize::from(qp)];
        curbe.set_bits(79, 0, 16, skip_threshold(qp[0]));
        curbe.set_bits(79, 16, 16, skip_threshold(qp[1]));
        curbe.set_bits(80, 0, 16, skip_threshold(qp[2]));
        curbe.set_bits(80, 16, 16, skip_threshold(qp[3]));

        let bt = &BINDING_TABLES.mbenc;
        let indices = [
            bt.per_mb_out,
            bt.curr_y,
            bt.curr_y,
            bt.mv_data_from_me,
            bt.ind_mv_data,
            bt.ref_mb_count,
            bt.inter_pred,
            bt.refs[0],
            bt.refs[1],
            bt.refs[2],
            bt.per_mb_quant,
            bt.segmentation_map,
            bt.inter_pred_distortion,
            bt.histogram,
            bt.per_mv_data,
            bt.mode_cost_update,
            bt.p_vme_debug_streamout,
        ];
        for (i, index) in indices.into_iter().enumerate() {
            curbe.set(81 + i, index);
        }

        curbe
    }
}

impl Vp8CurbeBuilder for Gen9CurbeBuilder {
    fn kernel_layout(&self, kernel: KernelId) -> KernelLayout {
        let (dwords, binding_table_count) = match kernel {
            KernelId::Scaling => (SCALING_CURBE_DWORDS, SCALING_NUM_SURFACES),
            KernelId::Me => (ME_CURBE_DWORDS, ME_NUM_SURFACES),
            KernelId::MbEncILuma | KernelId::MbEncIChroma | KernelId::BrcIFrameDist => {
                (MBENC_I_CURBE_DWORDS, MBENC_NUM_SURFACES)
            }
            KernelId::MbEncP => (MBENC_P_CURBE_DWORDS, MBENC_NUM_SURFACES),
            KernelId::BrcInit | KernelId::BrcReset => {
                (BRC_INIT_RESET_CURBE_DWORDS, BRC_INIT_RESET_NUM_SURFACES)
            }
            KernelId::BrcUpdate => (BRC_UPDATE_CURBE_DWORDS, BRC_UPDATE_NUM_SURFACES),
            KernelId::Mpu => (MPU_CURBE_DWORDS, MPU_NUM_SURFACES),
            KernelId::Tpu => (TPU_CURBE_DWORDS, TPU_NUM_SURFACES),
        };

        KernelLayout {
            curbe_size: dwords * 4,
            binding_table_count,
        }
    }

    fn binding_tables(&self) -> &BindingTables {
        &BINDING_TABLES
    }

    fn tpu_pak_stats_layout(&self) -> TpuPakStatsLayout {
        TpuPakStatsLayout {
            pak_pass_num: 6,
            cumulative_dq_index01: 8,
            cumulative_dq_index23: 9,
            cumulative_loop_filter01: 10,
            cumulative_loop_filter23: 11,
        }
    }

    fn scaling_curbe(&self, params: &ScalingCurbeParams) -> Vec<u8> {
        let mut curbe = CurbeWriter::new(SCALING_CURBE_DWORDS);
        curbe.set_bits(0, 0, 16, params.input_width);
        curbe.set_bits(0, 16, 16, params.input_height);
        curbe.set(1, BINDING_TABLES.scaling.src_y);
        curbe.set(2, BINDING_TABLES.scaling.dst_y);
        curbe.set(8, SCALING_FLATNESS_BTI);
        curbe.set(10, SCALING_MBVPROC_BTI);
        curbe.into_bytes()
    }

    fn me_curbe(&self, params: &MeCurbeParams) -> Vec<u8> {
        let me_mode = match (params.me_16x_enabled, params.use_16x) {
            (true, true) => ME16X_BEFORE_ME4X,
            (true, false) => ME4X_AFTER_ME16X,
            (false, _) => ME4X_ONLY,
        };
        let scale_factor = if me_mode == ME16X_BEFORE_ME4X { 16 } else { 4 };

        let mut curbe = CurbeWriter::new(ME_CURBE_DWORDS);
        curbe.set_bits(1, 0, 6, 0x10);

        curbe.set_bits(2, 0, 8, 57);
        curbe.set_bits(2, 8, 8, 57);

        curbe.set_bits(3, 12, 2, 3);
        curbe.set_flag(3, 18, true);
        curbe.set_bits(3, 24, 7, 0x77);

        let height_in_mb = crate::utils::mbs_from_pixels(params.frame_height / scale_factor);
        let width_in_mb = crate::utils::mbs_from_pixels(params.frame_width / scale_factor);
        curbe.set_bits(4, 8, 8, height_in_mb.saturating_sub(1).max(2));
        curbe.set_bits(4, 16, 8, width_in_mb.max(3));

        curbe.set_bits(5, 16, 8, 48);
        curbe.set_bits(5, 24, 8, 40);

        curbe.set_bits(6, 3, 2, me_mode);
        curbe.set_bits(6, 8, 8, by_mode(params.kernel_mode, 5, 0, 1));
        curbe.set_bits(6, 16, 16, 0x7fc);

        let num_refs = NUM_REFS[usize::from(params.ref_frame_ctrl & 0x7)];
        curbe.set_bits(13, 0, 8, u32::from(num_refs).wrapping_sub(1));

        curbe.set_bytes(16, search_path(params.kernel_mode));

        let bt = &BINDING_TABLES.me;
        curbe.set(32, bt.mv_data);
        curbe.set(33, bt.mv_data_16x);
        curbe.set(34, bt.distortion);
        curbe.set(35, bt.min_dist_brc);
        curbe.set(36, bt.inter_pred);

        curbe.into_bytes()
    }

    fn mbenc_curbe(&self, params: &MbEncCurbeParams) -> Vec<u8> {
        match params.frame_type {
            FrameType::Intra => self.mbenc_i_curbe(params),
            FrameType::Inter => self.mbenc_p_curbe(params),
        }
        .into_bytes()
    }

    fn brc_init_reset_curbe(&self, params: &BrcInitResetCurbeParams) -> Vec<u8> {
        let sequence = params.sequence;
        let picture = params.picture;
        let bps = params.bps_ratio;
        let mut curbe = CurbeWriter::new(BRC_INIT_RESET_CURBE_DWORDS);

        curbe.set(0, params.frame_width * params.frame_height);
        curbe.set(1, params.init_buf_full_in_bits);
        curbe.set(2, params.buf_size_in_bits);
        curbe.set(3, params.average_bit_rate);
        curbe.set(4, params.max_bit_rate);
        curbe.set(
            6,
            sequence.frames_per_100_sec[usize::from(sequence.num_temporal_layers_minus1)],
        );
        curbe.set(7, 100);

        let brc_flag = match sequence.rate_control_method {
            crate::encoder::RateControlMethod::Cbr => BRCINIT_ISCBR,
            crate::encoder::RateControlMethod::Vbr => BRCINIT_ISVBR,
            crate::encoder::RateControlMethod::Cqp => 0,
        };
        curbe.set_bits(8, 0, 16, brc_flag);
        curbe.set_bits(8, 16, 16, sequence.gop_pic_size.wrapping_sub(1));

        curbe.set_bits(9, 16, 16, u32::from(sequence.frame_width));
        curbe.set_bits(10, 0, 16, u32::from(sequence.frame_height));
        curbe.set_bits(10, 16, 16, 30);
        curbe.set_bits(11, 0, 16, 150);
        curbe.set_bits(11, 16, 16, u32::from(picture.clamp_qindex_low));
        curbe.set_bits(12, 0, 16, u32::from(picture.clamp_qindex_high));
        curbe.set_bits(12, 16, 16, 60);
        curbe.set(13, 100 | (115 << 16));
        curbe.set(14, 100 | (100 << 16));

        curbe.set_bytes(15, &[30, 50, 70, 120]);
        curbe.set_bytes(17, &[30, 50, 90, 115]);

        let thresholds: [(usize, f64, [f64; 4]); 6] = [
            (18, -50.0, [0.9, 0.66, 0.46, 0.3]),
            (19, 50.0, [0.3, 0.46, 0.7, 0.9]),
            (20, -50.0, [0.9, 0.7, 0.5, 0.3]),
            (21, 100.0, [0.4, 0.5, 0.75, 0.9]),
            (22, -50.0, [0.8, 0.6, 0.34, 0.2]),
            (23, 50.0, [0.2, 0.4, 0.66, 0.9]),
        ];
        for (dw, coefficient, bases) in thresholds {
            for (i, base) in bases.into_iter().enumerate() {
                curbe.set_bits(dw, 8 * i as u32, 8, deviation(coefficient, base, bps));
            }
        }

        curbe.set_bits(24, 0, 8, sequence.num_temporal_layers() as u32);
        curbe.set_bits(24, 8, 8, params.max_level_ratios[0]);
        curbe.set_bits(24, 16, 8, params.max_level_ratios[1]);
        curbe.set_bits(24, 24, 8, params.max_level_ratios[2]);
        curbe.set_bits(25, 0, 8, params.max_level_ratios[3]);

        curbe.set(26, BINDING_TABLES.brc_init_reset.history);
        curbe.set(27, BINDING_TABLES.brc_init_reset.distortion);

        curbe.into_bytes()
    }

    fn brc_update_curbe(&self, params: &BrcUpdateCurbeParams) -> Vec<u8> {
        let sequence = params.sequence;
        let picture = params.picture;
        let quant = params.quant;
        let mut curbe = CurbeWriter::new(BRC_UPDATE_CURBE_DWORDS);

        curbe.set(0, params.target_size);
        curbe.set(3, 10 | (50 << 16));
        curbe.set(4, 100 | (150 << 16));

        curbe.set_bits(5, 0, 8, u32::from(params.target_size_flag));
        curbe.set_bits(5, 8, 8, 16 * sequence.rate_control_method as u32);
        curbe.set_bits(5, 16, 8, u32::from(params.brc_pak_passes));
        let frame_type = if params.frame_type.is_intra() { 2 } else { 0 };
        curbe.set_bits(5, 24, 8, frame_type);

        curbe.set_bits(6, 0, 8, u32::from(picture.temporal_id));
        curbe.set_bits(6, 8, 8, sequence.num_temporal_layers() as u32);

        curbe.set_bytes(8, &[1, 1, 3, 2]);
        curbe.set_bytes(9, &[1, 40, 5, 5]);
        curbe.set_bytes(10, &[3, 1, 20, 40]);
        curbe.set_bytes(11, &[60, 90, 40, 75]);
        curbe.set_bytes(12, &[97, 103, 125, 160]);
        curbe.set_bytes(13, &[0xfd, 0xfe, 0xff, 0]);
        curbe.set_bytes(14, &[1, 2, 3, 0]);

        curbe.set_bits(15, 0, 16, params.frame_width_in_mb);
        curbe.set_bits(15, 16, 16, params.frame_height_in_mb);

        curbe.set_bytes(16, &quant.q_index);
        curbe.set_bytes(17, &quant.q_index);

        let delta = |index: usize| quant.q_index_delta[index] as u8;
        curbe.set_bytes(
            18,
            &[
                delta(QINDEX_Y1_DC),
                delta(QINDEX_Y2_AC),
                delta(QINDEX_Y2_DC),
                delta(QINDEX_UV_AC),
            ],
        );
        curbe.set_bits(19, 0, 8, u32::from(delta(QINDEX_UV_DC)));
        if !params.frame_type.is_intra() {
            curbe.set_bits(
                19,
                16,
                8,
                main_ref(sequence, picture, params.ref_frame_ctrl),
            );
            curbe.set_bits(19, 24, 8, u32::from(params.ref_frame_ctrl));
        }

        curbe.set_bits(20, 0, 8, u32::from(picture.segmentation_enabled));
        curbe.set_bits(20, 8, 8, u32::from(sequence.mbbrc == 1));
        curbe.set_bits(20, 16, 8, sequence.rate_control_method as u32);
        curbe.set_bits(
            20,
            24,
            8,
            u32::from(params.kernel_mode == KernelMode::Performance),
        );

        let bt = &BINDING_TABLES.brc_update;
        let indices = [
            bt.history,
            bt.pak_statistics,
            bt.encoder_cfg_read,
            bt.encoder_cfg_write,
            bt.mbenc_curbe_read,
            bt.mbenc_curbe_write,
            bt.distortion,
            bt.constant_data,
            bt.segment_map,
            bt.mpu_curbe_read,
            bt.mpu_curbe_write,
            bt.tpu_curbe_read,
            bt.tpu_curbe_write,
        ];
        for (i, index) in indices.into_iter().enumerate() {
            curbe.set(22 + i, index);
        }

        curbe.into_bytes()
    }

    fn mpu_curbe(&self, params: &MpuCurbeParams) -> Vec<u8> {
        let sequence = params.sequence;
        let picture = params.picture;
        let quant = params.quant;
        let mut curbe = CurbeWriter::new(MPU_CURBE_DWORDS);

        curbe.set(0, aligned_frame_size(sequence));

        curbe.set_flag(1, 0, !picture.frame_type.is_intra());
        curbe.set_bits(1, 1, 3, u32::from(picture.version));
        curbe.set_flag(1, 4, picture.show_frame);
        curbe.set_bits(1, 5, 2, u32::from(sequence.frame_width_scale));
        curbe.set_bits(1, 7, 2, u32::from(sequence.frame_height_scale));
        curbe.set_bits(1, 9, 1, u32::from(picture.color_space));
        curbe.set_bits(1, 10, 1, u32::from(picture.clamping_type));
        curbe.set_bits(1, 11, 2, u32::from(picture.coded_coeff_token_partition));
        curbe.set_flag(1, 13, picture.segmentation_enabled);
        curbe.set_flag(
            1,
            14,
            picture.segmentation_enabled && picture.update_mb_segmentation_map,
        );
        curbe.set_flag(1, 15, picture.update_segment_feature_data);
        // Segment features are coded as deltas.
        curbe.set_flag(1, 16, true);
        curbe.set_bits(1, 17, 1, u32::from(picture.filter_type));
        curbe.set_bits(1, 18, 3, u32::from(picture.sharpness_level));
        curbe.set_flag(1, 21, picture.loop_filter_adj_enable);
        curbe.set_flag(1, 22, picture.mb_no_coeff_skip);
        let golden_copy = if picture.refresh_golden_frame {
            3
        } else {
            picture.copy_buffer_to_golden
        };
        let alternate_copy = if picture.refresh_alternate_frame {
            3
        } else {
            picture.copy_buffer_to_alternate
        };
        curbe.set_bits(1, 23, 2, u32::from(golden_copy));
        curbe.set_bits(1, 25, 2, u32::from(alternate_copy));
        curbe.set_flag(1, 27, picture.refresh_last);
        curbe.set_flag(1, 28, picture.sign_bias_golden);
        curbe.set_flag(1, 29, picture.sign_bias_alternate);
        curbe.set_flag(1, 30, picture.refresh_entropy_probs);
        curbe.set_flag(1, 31, picture.forced_lf_adjustment);

        let loop_filter_level = if picture.version > 1 {
            0
        } else {
            picture.loop_filter_level[0]
        };
        let delta = |index: usize| quant.q_index_delta[index] as u8;
        curbe.set_bits(2, 0, 6, u32::from(loop_filter_level));
        curbe.set_bits(2, 8, 7, u32::from(quant.q_index[0]));
        curbe.set_bits(2, 16, 8, u32::from(delta(QINDEX_Y1_DC)));
        curbe.set_bits(2, 24, 8, u32::from(delta(QINDEX_Y2_DC)));

        curbe.set_bytes(
            3,
            &[
                delta(QINDEX_Y2_AC),
                delta(QINDEX_UV_DC),
                delta(QINDEX_UV_AC),
                quant.q_index[0],
            ],
        );
        curbe.set_bytes(
            4,
            &[
                quant.q_index[1],
                quant.q_index[2],
                quant.q_index[3],
                picture.loop_filter_level[0],
            ],
        );
        curbe.set_bytes(
            5,
            &[
                picture.loop_filter_level[1],
                picture.loop_filter_level[2],
                picture.loop_filter_level[3],
                picture.ref_lf_delta[0] as u8,
            ],
        );
        curbe.set_bytes(
            6,
            &[
                picture.ref_lf_delta[1] as u8,
                picture.ref_lf_delta[2] as u8,
                picture.ref_lf_delta[3] as u8,
                picture.mode_lf_delta[0] as u8,
            ],
        );

        curbe.set_bits(7, 0, 8, u32::from(picture.mode_lf_delta[1] as u8));
        curbe.set_bits(7, 8, 8, u32::from(picture.mode_lf_delta[2] as u8));
        curbe.set_bits(7, 16, 8, u32::from(picture.mode_lf_delta[3] as u8));
        curbe.set_flag(7, 24, true);
        curbe.set_flag(7, 25, true);
        curbe.set_flag(7, 26, picture.version > 0);
        curbe.set_flag(7, 27, picture.version >= 3);
        curbe.set_bits(7, 28, 4, u32::from(params.max_pak_passes));

        curbe.set_bits(8, 0, 8, u32::from(picture.temporal_id));
        curbe.set_bits(8, 8, 8, sequence.num_temporal_layers() as u32);

        let bt = &BINDING_TABLES.mpu;
        let indices = [
            bt.histogram,
            bt.ref_mode_probability,
            bt.curr_mode_probability,
            bt.ref_token_probability,
            bt.curr_token_probability,
            bt.header_bitstream,
            bt.header_metadata,
            bt.picture_state,
            bt.mpu_bitstream,
            bt.token_bits_data,
            bt.vme_debug_streamout,
            bt.entropy_cost,
            bt.mode_cost_update,
        ];
        for (i, index) in indices.into_iter().enumerate() {
            curbe.set(12 + i, index);
        }

        curbe.into_bytes()
    }

    fn tpu_curbe(&self, params: &TpuCurbeParams) -> Vec<u8> {
        let picture = params.picture;
        let mut curbe = CurbeWriter::new(TPU_CURBE_DWORDS);

        curbe.set(0, params.frame_width_in_mb * params.frame_height_in_mb);

        curbe.set_flag(1, 0, !picture.frame_type.is_intra());
        curbe.set_flag(1, 1, picture.segmentation_enabled);
        curbe.set_flag(1, 2, params.rebinarization_frame_hdr);
        curbe.set_flag(1, 3, picture.refresh_entropy_probs);
        curbe.set_flag(1, 4, picture.mb_no_coeff_skip);

        curbe.set_bits(3, 16, 8, u32::from(picture.clamp_qindex_high));
        curbe.set_bits(3, 24, 8, u32::from(picture.clamp_qindex_low));

        curbe.set_bytes(4, &picture.loop_filter_level);
        curbe.set_bytes(5, &params.quant.q_index);

        // Only meaningful without bitrate control, the video engine patches it after every pass.
        curbe.set(6, u32::from(params.max_pak_passes) << 8);

        if params.adaptive_repak {
            curbe.set(7, 50 | (100 << 16));
        }

        let bt = &BINDING_TABLES.tpu;
        let indices = [
            bt.pak_token_statistics,
            bt.token_update_flags,
            bt.entropy_cost,
            bt.header_bitstream,
            bt.default_token_probability,
            bt.picture_state,
            bt.mpu_curbe_data,
            bt.header_metadata,
            bt.token_probability,
            bt.pak_hw_pass1_probability,
            bt.key_frame_token_probability,
            bt.updated_token_probability,
            bt.pak_hw_pass2_probability,
            bt.vme_debug_streamout,
            bt.repak_decision,
        ];
        for (i, index) in indices.into_iter().enumerate() {
            curbe.set(12 + i, index);
        }

        curbe.into_bytes()
    }

    fn brc_constant_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(BRC_CONSTANT_DATA_SIZE);
        data.extend_from_slice(&BRC_QP_ADJUSTMENT);
        data.extend_from_slice(&BRC_IFRAME_COST);

        let mut pframe_cost = vec![0u8; BRC_PFRAME_COST.len() * 4];
        LittleEndian::write_u32_into(&BRC_PFRAME_COST, &mut pframe_cost);
        data.extend_from_slice(&pframe_cost);

        data.extend_from_slice(&u16_bytes(&BRC_QUANT_DC));
        data.extend_from_slice(&u16_bytes(&BRC_QUANT_AC));
        data.extend_from_slice(&u16_bytes(&BRC_SKIP_MV_THRESHOLD));
        data
    }

    fn mbenc_i_cost_tables(&self) -> (Vec<u8>, Vec<u8>) {
        (u16_bytes(&MB_MODE_COST_LUMA), u16_bytes(&BLOCK_MODE_COST))
    }
}

const BRC_CONSTANT_DATA_SIZE: usize = 2880;

fn u16_bytes(values: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 2];
    LittleEndian::write_u16_into(values, &mut bytes);
    bytes
}

const BRCINIT_ISCBR: u32 = 0x10;
const BRCINIT_ISVBR: u32 = 0x20;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::vp8::QuantData;
    use crate::encoder::RateControlMethod;
    use crate::utils::read_dword;

    fn quant(q_index: u8) -> QuantData {
        QuantData {
            q_index: [q_index; MAX_SEGMENTS],
            q_index_delta: [0; 5],
        }
    }

    fn mbenc_params<'a>(
        sequence: &'a SequenceParameters,
        picture: &'a PictureParameters,
        quant: &'a QuantData,
        frame_type: FrameType,
    ) -> MbEncCurbeParams<'a> {
        MbEncCurbeParams {
            sequence,
            picture,
            quant,
            frame_type,
            kernel_mode: KernelMode::Normal,
            hme_enabled: true,
            ref_frame_ctrl: 0x7,
            frame_position_in_gop: 1,
            average_key_frame_qp: 30,
            average_p_frame_qp: 30,
        }
    }

    #[test]
    fn test_kernel_layouts() {
        let builder = Gen9CurbeBuilder;
        assert_eq!(
            builder.kernel_layout(KernelId::MbEncP),
            KernelLayout {
                curbe_size: 392,
                binding_table_count: 19
            }
        );
        assert_eq!(builder.kernel_layout(KernelId::BrcIFrameDist).curbe_size, 180);
        assert_eq!(builder.kernel_layout(KernelId::BrcUpdate).curbe_size, 140);
        assert_eq!(builder.kernel_layout(KernelId::Tpu).binding_table_count, 15);
    }

    #[test]
    fn test_mbenc_i_curbe() {
        let sequence = SequenceParameters {
            frame_width: 300,
            frame_height: 200,
            ..Default::default()
        };
        let picture = PictureParameters::default();
        let quant = quant(10);
        let params = mbenc_params(&sequence, &picture, &quant, FrameType::Intra);

        let curbe = Gen9CurbeBuilder.mbenc_curbe(&params);
        assert_eq!(curbe.len(), MBENC_I_CURBE_DWORDS * 4);

        assert_eq!(read_dword(&curbe, 0), Some(304 | (208 << 16)));
        // Chroma IP enhancement, histogram update and distortion measure.
        assert_eq!(read_dword(&curbe, 1), Some((1 << 5) | (1 << 6) | (2 << 9)));

        let dc = u32::from(QUANT_DC[10]);
        assert_eq!(read_dword(&curbe, 2), Some(dc * dc / 4));
        // No segmentation: segments 1 to 3 are left untouched.
        assert_eq!(read_dword(&curbe, 3), Some(0));
        assert_eq!(read_dword(&curbe, 4), Some(1500));
        assert_eq!(read_dword(&curbe, 11), Some(0));

        assert_eq!(read_dword(&curbe, 24), Some(u32::from(IFRAME_VME_COSTS[40])));
        assert_eq!(read_dword(&curbe, 33), Some(1));
        assert_eq!(read_dword(&curbe, 34), Some(1));
        assert_eq!(read_dword(&curbe, 44), Some(12));
    }

    #[test]
    fn test_mbenc_i_curbe_segmentation() {
        let sequence = SequenceParameters::default();
        let picture = PictureParameters {
            segmentation_enabled: true,
            ..Default::default()
        };
        let quant = QuantData {
            q_index: [10, 20, 30, 40],
            q_index_delta: [0; 5],
        };
        let params = mbenc_params(&sequence, &picture, &quant, FrameType::Intra);

        let curbe = Gen9CurbeBuilder.mbenc_curbe(&params);

        let lambda = |qp: usize| u32::from(QUANT_DC[qp]) * u32::from(QUANT_DC[qp]) / 4;
        assert_eq!(read_dword(&curbe, 1).map(|dw| dw & 0x2), Some(0x2));
        assert_eq!(read_dword(&curbe, 3), Some(lambda(30) | (lambda(40) << 16)));
        assert_eq!(read_dword(&curbe, 5), Some(1500 | (1500 << 16)));
        assert_ne!(read_dword(&curbe, 13), Some(0));
    }

    #[test]
    fn test_mbenc_p_curbe() {
        let sequence = SequenceParameters::default();
        let picture = PictureParameters {
            frame_type: FrameType::Inter,
            sign_bias_golden: true,
            temporal_id: 0,
            ..Default::default()
        };
        let quant = quant(20);
        let mut params = mbenc_params(&sequence, &picture, &quant, FrameType::Inter);
        params.ref_frame_ctrl = 0x3;
        params.frame_position_in_gop = 2;
        params.average_key_frame_qp = 10;
        params.average_p_frame_qp = 40;

        let curbe = Gen9CurbeBuilder.mbenc_curbe(&params);
        assert_eq!(curbe.len(), MBENC_P_CURBE_DWORDS * 4);

        let dw1 = read_dword(&curbe, 1).unwrap();
        assert_eq!(dw1 & 0x1, 1);
        assert_eq!((dw1 >> 1) & 0x3, 1);
        assert_eq!((dw1 >> 3) & 0x1, 1);
        assert_eq!((dw1 >> 16) & 0xf, 0x3);
        assert_eq!((dw1 >> 25) & 0x3f, u32::from(MAINREF_TABLE[3]));

        let lambda = u32::from(QUANT_DC[20]);
        assert_eq!(read_dword(&curbe, 2), Some(lambda | ((lambda >> 2) << 16)));
        // Golden sign bias only: byte 1 is golden ^ alt, byte 3 is golden.
        assert_eq!(read_dword(&curbe, 6), Some((1 << 8) | (1 << 24)));
        assert_eq!(read_dword(&curbe, 7), Some(50));
        assert_eq!(read_dword(&curbe, 13), Some(COST_TABLE[20 * 7]));
        assert_eq!(
            read_dword(&curbe, 16),
            Some(u32::from_le_bytes([
                DIAMOND[0], DIAMOND[1], DIAMOND[2], DIAMOND[3]
            ]))
        );

        let key = u32::from(QUANT_DC[10]) & 0xff;
        let p = u32::from(QUANT_DC[40]) & 0xff;
        assert_eq!(read_dword(&curbe, 62), Some(p | (key << 8) | (key << 16)));
        assert_eq!(read_dword(&curbe, 64), Some(COST_TABLE[20 * 7]));
        assert_eq!(read_dword(&curbe, 81), Some(0));
        assert_eq!(read_dword(&curbe, 83), Some(1));
        assert_eq!(read_dword(&curbe, 92), Some(6));
        assert_eq!(read_dword(&curbe, 97), Some(18));
    }

    #[test]
    fn test_mbenc_p_curbe_temporal_layers() {
        let sequence = SequenceParameters {
            num_temporal_layers_minus1: 1,
            ..Default::default()
        };
        let picture = PictureParameters {
            frame_type: FrameType::Inter,
            first_ref: 2,
            second_ref: 1,
            ..Default::default()
        };
        let quant = quant(20);
        let mut params = mbenc_params(&sequence, &picture, &quant, FrameType::Inter);
        params.ref_frame_ctrl = 0x3;

        let curbe = Gen9CurbeBuilder.mbenc_curbe(&params);
        let dw1 = read_dword(&curbe, 1).unwrap();
        // Order is alt, last, golden and alt is not allowed.
        assert_eq!((dw1 >> 25) & 0x3f, 1 | (2 << 2));
    }

    #[test]
    fn test_me_curbe() {
        let mut params = MeCurbeParams {
            frame_width: 320,
            frame_height: 240,
            kernel_mode: KernelMode::Normal,
            me_16x_enabled: true,
            use_16x: false,
            ref_frame_ctrl: 0x7,
        };

        let curbe = Gen9CurbeBuilder.me_curbe(&params);
        assert_eq!(curbe.len(), ME_CURBE_DWORDS * 4);
        assert_eq!(read_dword(&curbe, 1), Some(0x10));
        assert_eq!(read_dword(&curbe, 2), Some(57 | (57 << 8)));
        assert_eq!(read_dword(&curbe, 4), Some((3 << 8) | (5 << 16)));
        assert_eq!(read_dword(&curbe, 6), Some((3 << 3) | (5 << 8) | (0x7fc << 16)));
        assert_eq!(read_dword(&curbe, 13), Some(2));
        assert_eq!(read_dword(&curbe, 33), Some(2));

        params.use_16x = true;
        let curbe = Gen9CurbeBuilder.me_curbe(&params);
        // 20x15 pixels are clamped to the minimum kernel dimensions.
        assert_eq!(read_dword(&curbe, 4), Some((2 << 8) | (3 << 16)));
        assert_eq!(read_dword(&curbe, 6).map(|dw| (dw >> 3) & 0x3), Some(0));

        params.me_16x_enabled = false;
        params.kernel_mode = KernelMode::Performance;
        params.ref_frame_ctrl = 0x1;
        let curbe = Gen9CurbeBuilder.me_curbe(&params);
        assert_eq!(read_dword(&curbe, 6).map(|dw| (dw >> 3) & 0x3), Some(2));
        assert_eq!(read_dword(&curbe, 6).map(|dw| (dw >> 8) & 0xff), Some(0));
        assert_eq!(read_dword(&curbe, 13), Some(0));
    }

    #[test]
    fn test_brc_init_reset_curbe() {
        let sequence = SequenceParameters {
            rate_control_method: RateControlMethod::Cbr,
            gop_pic_size: 30,
            ..Default::default()
        };
        let picture = PictureParameters {
            clamp_qindex_low: 4,
            clamp_qindex_high: 120,
            ..Default::default()
        };
        let params = BrcInitResetCurbeParams {
            sequence: &sequence,
            picture: &picture,
            frame_width: 320,
            frame_height: 240,
            average_bit_rate: 1_000_000,
            max_bit_rate: 1_000_000,
            init_buf_full_in_bits: 700_000,
            buf_size_in_bits: 800_000,
            bps_ratio: 1.25,
            max_level_ratios: [0; 4],
        };

        let curbe = Gen9CurbeBuilder.brc_init_reset_curbe(&params);
        assert_eq!(curbe.len(), BRC_INIT_RESET_CURBE_DWORDS * 4);
        assert_eq!(read_dword(&curbe, 0), Some(320 * 240));
        assert_eq!(read_dword(&curbe, 6), Some(3000));
        assert_eq!(read_dword(&curbe, 7), Some(100));
        assert_eq!(read_dword(&curbe, 8), Some(0x10 | (29 << 16)));
        assert_eq!(read_dword(&curbe, 9), Some(320 << 16));
        assert_eq!(read_dword(&curbe, 11), Some(150 | (4 << 16)));
        assert_eq!(read_dword(&curbe, 12), Some(120 | (60 << 16)));

        let dw18 = read_dword(&curbe, 18).unwrap();
        assert_eq!((dw18 & 0xff) as u8 as i8, (-50.0 * 0.9f64.powf(1.25)) as i8);
        assert_eq!(read_dword(&curbe, 24), Some(1));
        assert_eq!(read_dword(&curbe, 27), Some(1));
    }

    #[test]
    fn test_brc_update_curbe() {
        let sequence = SequenceParameters {
            rate_control_method: RateControlMethod::Vbr,
            mbbrc: 1,
            ..Default::default()
        };
        let picture = PictureParameters {
            frame_type: FrameType::Inter,
            ..Default::default()
        };
        let quant = QuantData {
            q_index: [10, 11, 12, 13],
            q_index_delta: [1, -1, 2, -2, 3],
        };
        let params = BrcUpdateCurbeParams {
            sequence: &sequence,
            picture: &picture,
            quant: &quant,
            frame_type: FrameType::Inter,
            kernel_mode: KernelMode::Performance,
            ref_frame_ctrl: 0x1,
            target_size: 12345,
            target_size_flag: true,
            brc_pak_passes: 4,
            frame_width_in_mb: 20,
            frame_height_in_mb: 15,
        };

        let curbe = Gen9CurbeBuilder.brc_update_curbe(&params);
        assert_eq!(curbe.len(), BRC_UPDATE_CURBE_DWORDS * 4);
        assert_eq!(read_dword(&curbe, 0), Some(12345));
        assert_eq!(read_dword(&curbe, 1), Some(0));
        assert_eq!(read_dword(&curbe, 5), Some(1 | (32 << 8) | (4 << 16)));
        assert_eq!(read_dword(&curbe, 6), Some(1 << 8));
        assert_eq!(read_dword(&curbe, 13), Some(0x00ff_fefd));
        assert_eq!(read_dword(&curbe, 15), Some(20 | (15 << 16)));
        assert_eq!(read_dword(&curbe, 16), Some(0x0d0c_0b0a));
        assert_eq!(read_dword(&curbe, 18), Some(u32::from_le_bytes([1, 2, 0xff, 3])));

        let dw19 = read_dword(&curbe, 19).unwrap();
        assert_eq!(dw19 & 0xff, 0xfe);
        assert_eq!((dw19 >> 16) & 0xff, u32::from(MAINREF_TABLE[1]));
        assert_eq!(dw19 >> 24, 1);

        assert_eq!(read_dword(&curbe, 20), Some(1 << 8 | (2 << 16) | (1 << 24)));
        assert_eq!(read_dword(&curbe, 22), Some(1));
        assert_eq!(read_dword(&curbe, 34), Some(13));
    }

    #[test]
    fn test_mpu_curbe() {
        let sequence = SequenceParameters::default();
        let picture = PictureParameters {
            frame_type: FrameType::Inter,
            version: 3,
            refresh_golden_frame: true,
            copy_buffer_to_alternate: 2,
            loop_filter_level: [10, 11, 12, 13],
            ..Default::default()
        };
        let quant = quant(40);
        let params = MpuCurbeParams {
            sequence: &sequence,
            picture: &picture,
            quant: &quant,
            max_pak_passes: 2,
        };

        let curbe = Gen9CurbeBuilder.mpu_curbe(&params);
        assert_eq!(curbe.len(), MPU_CURBE_DWORDS * 4);

        let dw1 = read_dword(&curbe, 1).unwrap();
        assert_eq!(dw1 & 0x1, 1);
        assert_eq!((dw1 >> 1) & 0x7, 3);
        assert_eq!((dw1 >> 16) & 0x1, 1);
        assert_eq!((dw1 >> 23) & 0x3, 3);
        assert_eq!((dw1 >> 25) & 0x3, 2);

        // Version 3 disables the loop filter level field.
        assert_eq!(read_dword(&curbe, 2), Some(40 << 8));
        assert_eq!(read_dword(&curbe, 4), Some(40 | (40 << 8) | (40 << 16) | (10 << 24)));
        assert_eq!(
            read_dword(&curbe, 7),
            Some((1 << 24) | (1 << 25) | (1 << 26) | (1 << 27) | (2 << 28))
        );
        assert_eq!(read_dword(&curbe, 8), Some(1 << 8));
        assert_eq!(read_dword(&curbe, 24), Some(12));
    }

    #[test]
    fn test_tpu_curbe() {
        let picture = PictureParameters {
            clamp_qindex_low: 2,
            clamp_qindex_high: 100,
            ..Default::default()
        };
        let quant = quant(40);
        let mut params = TpuCurbeParams {
            picture: &picture,
            quant: &quant,
            frame_width_in_mb: 20,
            frame_height_in_mb: 15,
            rebinarization_frame_hdr: true,
            adaptive_repak: true,
            max_pak_passes: 2,
        };

        let curbe = Gen9CurbeBuilder.tpu_curbe(&params);
        assert_eq!(curbe.len(), TPU_CURBE_DWORDS * 4);
        assert_eq!(read_dword(&curbe, 0), Some(300));
        assert_eq!(read_dword(&curbe, 1), Some((1 << 2) | (1 << 4)));
        assert_eq!(read_dword(&curbe, 3), Some((100 << 16) | (2 << 24)));
        assert_eq!(read_dword(&curbe, 6), Some(2 << 8));
        assert_eq!(read_dword(&curbe, 7), Some(50 | (100 << 16)));
        assert_eq!(read_dword(&curbe, 26), Some(14));

        params.adaptive_repak = false;
        let curbe = Gen9CurbeBuilder.tpu_curbe(&params);
        assert_eq!(read_dword(&curbe, 7), Some(0));
    }

    #[test]
    fn test_scaling_curbe() {
        let curbe = Gen9CurbeBuilder.scaling_curbe(&ScalingCurbeParams {
            input_width: 320,
            input_height: 240,
        });
        assert_eq!(curbe.len(), SCALING_CURBE_DWORDS * 4);
        assert_eq!(read_dword(&curbe, 0), Some(320 | (240 << 16)));
        assert_eq!(read_dword(&curbe, 2), Some(1));
        assert_eq!(read_dword(&curbe, 10), Some(6));
    }

    #[test]
    fn test_constant_tables() {
        let builder = Gen9CurbeBuilder;

        let data = builder.brc_constant_data();
        assert_eq!(data.len(), BRC_CONSTANT_DATA_SIZE);
        assert_eq!(&data[..4], &BRC_QP_ADJUSTMENT[..4]);
        assert_eq!(&data[576..580], &BRC_IFRAME_COST[..4]);
        assert_eq!(read_dword(&data, 272), Some(BRC_PFRAME_COST[0]));

        let (luma, block) = builder.mbenc_i_cost_tables();
        assert_eq!(luma.len(), 20);
        assert_eq!(block.len(), 2000);
        assert_eq!(u16::from_le_bytes([luma[0], luma[1]]), MB_MODE_COST_LUMA[0]);
    }
}
