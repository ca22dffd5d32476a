// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Per-frame status records written by the video engine and the report built from them.
//!
//! Each frame owns a [`STATUS_RECORD_SIZE`] bytes record of the status buffer, selected by its
//! store data value. The PAK commands store the MFX registers into it and the last command of
//! the frame writes the store data value into the completion DWORD.

use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::utils::read_dword;

pub const STATUS_RECORD_SIZE: usize = 64;
pub const NUM_STATUS_RECORDS: usize = 512;
pub const STATUS_BUFFER_SIZE: usize = STATUS_RECORD_SIZE * NUM_STATUS_RECORDS;

/// Byte offsets of the fields within a record.
pub const COMPLETION_OFFSET: u32 = 0;
pub const FEEDBACK_NUMBER_OFFSET: u32 = 4;
pub const BYTE_COUNT_OFFSET: u32 = 8;
pub const IMAGE_STATUS_MASK_OFFSET: u32 = 12;
pub const IMAGE_STATUS_CTRL_OFFSET: u32 = 16;
pub const NUM_PASSES_OFFSET: u32 = 20;
pub const HEADER_BYTES_OFFSET: u32 = 24;
pub const LOOP_FILTER_LEVEL_OFFSET: u32 = 28;

/// DWORD of the PAK statistics holding the long term reference suggestion.
const PAK_STATS_LONG_TERM_DWORD: usize = 8;
/// DWORD of the PAK statistics holding the quantizer index in its low 7 bits.
const PAK_STATS_QINDEX_DWORD: usize = 4;

/// Offset in the status buffer of the record of the frame with `store_data`.
pub fn record_offset(store_data: u32) -> u32 {
    ((store_data as usize % NUM_STATUS_RECORDS) * STATUS_RECORD_SIZE) as u32
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeStatusRecord {
    pub completion: u32,
    pub feedback_number: u32,
    pub bitstream_byte_count: u32,
    pub image_status_mask: u32,
    pub image_status_ctrl: u32,
    pub num_passes: u32,
    pub header_bytes_inserted: u32,
    pub loop_filter_level: u32,
}

impl EncodeStatusRecord {
    pub fn parse(data: &[u8]) -> EncodeResult<Self> {
        let field = |offset: u32| {
            read_dword(data, offset as usize / 4).ok_or(EncodeError::NullInterface("status record"))
        };

        Ok(Self {
            completion: field(COMPLETION_OFFSET)?,
            feedback_number: field(FEEDBACK_NUMBER_OFFSET)?,
            bitstream_byte_count: field(BYTE_COUNT_OFFSET)?,
            image_status_mask: field(IMAGE_STATUS_MASK_OFFSET)?,
            image_status_ctrl: field(IMAGE_STATUS_CTRL_OFFSET)?,
            num_passes: field(NUM_PASSES_OFFSET)?,
            header_bytes_inserted: field(HEADER_BYTES_OFFSET)?,
            loop_filter_level: field(LOOP_FILTER_LEVEL_OFFSET)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecStatus {
    Successful,
    /// The video engine has not completed the frame yet.
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vp8StatusReport {
    pub codec_status: CodecStatus,
    pub status_report_feedback_number: u32,
    /// Size of the frame in bytes, headers included.
    pub bitstream_size: u32,
    pub average_qp: u8,
    pub long_term_indication: u8,
    pub loop_filter_level: u32,
    pub num_passes: u32,
}

impl Vp8StatusReport {
    /// Builds the report of the frame with `store_data` from its status record and the PAK
    /// statistics of the bitrate control.
    pub fn new(
        record: &EncodeStatusRecord,
        pak_statistics: &[u8],
        store_data: u32,
    ) -> EncodeResult<Self> {
        let stats_byte = |dword: usize| {
            pak_statistics
                .get(dword * 4)
                .copied()
                .ok_or(EncodeError::NullInterface("PAK statistics"))
        };

        let long_term_indication = stats_byte(PAK_STATS_LONG_TERM_DWORD)?;
        let average_qp = stats_byte(PAK_STATS_QINDEX_DWORD)? & 0x7f;

        let codec_status = if record.completion == store_data {
            CodecStatus::Successful
        } else {
            CodecStatus::Incomplete
        };

        Ok(Self {
            codec_status,
            status_report_feedback_number: record.feedback_number,
            bitstream_size: record
                .bitstream_byte_count
                .wrapping_add(record.header_bytes_inserted),
            average_qp,
            long_term_indication,
            loop_filter_level: record.loop_filter_level,
            num_passes: record.num_passes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_bytes(values: [u32; 8]) -> Vec<u8> {
        let mut bytes = vec![0u8; STATUS_RECORD_SIZE];
        for (i, value) in values.into_iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_record_offset() {
        assert_eq!(record_offset(0), 0);
        assert_eq!(record_offset(1), 64);
        assert_eq!(record_offset(511), 511 * 64);
        assert_eq!(record_offset(512), 0);
        assert_eq!(record_offset(513), 64);
    }

    #[test]
    fn test_parse_record() {
        let bytes = record_bytes([3, 42, 1000, 0x1, 0x100, 2, 24, 17]);
        let record = EncodeStatusRecord::parse(&bytes).unwrap();

        assert_eq!(
            record,
            EncodeStatusRecord {
                completion: 3,
                feedback_number: 42,
                bitstream_byte_count: 1000,
                image_status_mask: 0x1,
                image_status_ctrl: 0x100,
                num_passes: 2,
                header_bytes_inserted: 24,
                loop_filter_level: 17,
            }
        );

        assert!(EncodeStatusRecord::parse(&bytes[..16]).is_err());
    }

    #[test]
    fn test_status_report() {
        let record = EncodeStatusRecord::parse(&record_bytes([5, 7, 1000, 0, 0, 1, 24, 9])).unwrap();
        let mut stats = vec![0u8; 64];
        stats[16] = 0xff;
        stats[32] = 1;

        let report = Vp8StatusReport::new(&record, &stats, 5).unwrap();
        assert_eq!(report.codec_status, CodecStatus::Successful);
        assert_eq!(report.status_report_feedback_number, 7);
        assert_eq!(report.bitstream_size, 1024);
        assert_eq!(report.average_qp, 0x7f);
        assert_eq!(report.long_term_indication, 1);
        assert_eq!(report.loop_filter_level, 9);
        assert_eq!(report.num_passes, 1);

        let pending = Vp8StatusReport::new(&record, &stats, 6).unwrap();
        assert_eq!(pending.codec_status, CodecStatus::Incomplete);

        assert!(Vp8StatusReport::new(&record, &stats[..20], 5).is_err());
    }
}
