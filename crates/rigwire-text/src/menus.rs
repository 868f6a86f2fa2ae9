//! FTX-1 extended menu (`EX` command) table.
//!
//! Addresses are `GGSSII`: group, section, item, following the front-panel
//! menu tree. The amplifier items in section 03-07 only answer when the
//! SPA-1 is fitted; the GPS items in the same section do not need it.

use rigwire_core::hardware::OptionalHardware;
use rigwire_core::menu::{MenuItem, MenuTable, MenuToken};

/// Every FTX-1 menu item.
pub static FTX1_MENU: &[MenuItem] = &[
    // EX0101: MODE SSB
    MenuItem::signed(MenuToken::new(1, 1, 1), "SSB_AF_TREBLE", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 1, 2), "SSB_AF_MID", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 1, 3), "SSB_AF_BASS", 3, -20, 10),
    MenuItem::number(MenuToken::new(1, 1, 4), "SSB_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 1, 5), "SSB_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 1, 6), "SSB_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 1, 7), "SSB_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(1, 1, 8), "SSB_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 1, 9), "SSB_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(1, 1, 10), "SSB_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 1, 11), "SSB_USB_OUT_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 1, 12), "SSB_TX_BPF_SEL", 1, 0, 4),
    MenuItem::number(MenuToken::new(1, 1, 13), "SSB_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(1, 1, 14), "SSB_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 1, 15), "SSB_RPTT_SELECT", 1, 0, 2),
    MenuItem::number(MenuToken::new(1, 1, 16), "SSB_NAR_WIDTH", 2, 0, 22),
    MenuItem::number(MenuToken::new(1, 1, 17), "SSB_CW_AUTO_MODE", 1, 0, 2),
    // EX0102: MODE AM
    MenuItem::signed(MenuToken::new(1, 2, 1), "AM_AF_TREBLE", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 2, 2), "AM_AF_MID", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 2, 3), "AM_AF_BASS", 3, -20, 10),
    MenuItem::number(MenuToken::new(1, 2, 4), "AM_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 2, 5), "AM_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 2, 6), "AM_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 2, 7), "AM_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(1, 2, 8), "AM_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 2, 9), "AM_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(1, 2, 10), "AM_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 2, 11), "AM_USB_OUT_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 2, 12), "AM_TX_BPF_SEL", 1, 0, 4),
    MenuItem::number(MenuToken::new(1, 2, 13), "AM_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(1, 2, 14), "AM_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 2, 15), "AM_RPTT_SELECT", 1, 0, 2),
    // EX0103: MODE FM
    MenuItem::signed(MenuToken::new(1, 3, 1), "FM_AF_TREBLE", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 3, 2), "FM_AF_MID", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 3, 3), "FM_AF_BASS", 3, -20, 10),
    MenuItem::number(MenuToken::new(1, 3, 4), "FM_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 3, 5), "FM_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 3, 6), "FM_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 3, 7), "FM_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(1, 3, 8), "FM_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 3, 9), "FM_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(1, 3, 10), "FM_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 3, 11), "FM_USB_OUT_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 3, 12), "FM_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(1, 3, 13), "FM_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 3, 14), "FM_RPTT_SELECT", 1, 0, 2),
    MenuItem::number(MenuToken::new(1, 3, 15), "FM_RPT_SHIFT", 1, 0, 3),
    MenuItem::number(MenuToken::new(1, 3, 16), "FM_RPT_SHIFT_28", 4, 0, 1000),
    MenuItem::number(MenuToken::new(1, 3, 17), "FM_RPT_SHIFT_50", 4, 0, 4000),
    MenuItem::number(MenuToken::new(1, 3, 18), "FM_RPT_SHIFT_144", 4, 0, 100),
    MenuItem::number(MenuToken::new(1, 3, 19), "FM_RPT_SHIFT_430", 4, 0, 100),
    MenuItem::number(MenuToken::new(1, 3, 20), "FM_SQL_TYPE", 1, 0, 5),
    MenuItem::number(MenuToken::new(1, 3, 21), "FM_TONE_FREQ", 2, 0, 49),
    MenuItem::number(MenuToken::new(1, 3, 22), "FM_DCS_CODE", 2, 0, 103),
    MenuItem::number(MenuToken::new(1, 3, 23), "FM_DCS_RX_REV", 1, 0, 2),
    MenuItem::number(MenuToken::new(1, 3, 24), "FM_DCS_TX_REV", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 3, 25), "FM_PR_FREQ", 4, 300, 3000),
    MenuItem::number(MenuToken::new(1, 3, 26), "FM_DTMF_DELAY", 1, 0, 4),
    MenuItem::number(MenuToken::new(1, 3, 27), "FM_DTMF_SPEED", 1, 0, 1),
    MenuItem::text(MenuToken::new(1, 3, 28), "FM_DTMF_MEM1", 16),
    MenuItem::text(MenuToken::new(1, 3, 29), "FM_DTMF_MEM2", 16),
    MenuItem::text(MenuToken::new(1, 3, 30), "FM_DTMF_MEM3", 16),
    MenuItem::text(MenuToken::new(1, 3, 31), "FM_DTMF_MEM4", 16),
    MenuItem::text(MenuToken::new(1, 3, 32), "FM_DTMF_MEM5", 16),
    MenuItem::text(MenuToken::new(1, 3, 33), "FM_DTMF_MEM6", 16),
    MenuItem::text(MenuToken::new(1, 3, 34), "FM_DTMF_MEM7", 16),
    MenuItem::text(MenuToken::new(1, 3, 35), "FM_DTMF_MEM8", 16),
    MenuItem::text(MenuToken::new(1, 3, 36), "FM_DTMF_MEM9", 16),
    MenuItem::text(MenuToken::new(1, 3, 37), "FM_DTMF_MEM10", 16),
    // EX0104: MODE DATA
    MenuItem::signed(MenuToken::new(1, 4, 1), "DATA_AF_TREBLE", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 4, 2), "DATA_AF_MID", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 4, 3), "DATA_AF_BASS", 3, -20, 10),
    MenuItem::number(MenuToken::new(1, 4, 4), "DATA_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 4, 5), "DATA_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 4, 6), "DATA_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 4, 7), "DATA_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(1, 4, 8), "DATA_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 4, 9), "DATA_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(1, 4, 10), "DATA_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 4, 11), "DATA_USB_OUT_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 4, 12), "DATA_TX_BPF_SEL", 1, 0, 4),
    MenuItem::number(MenuToken::new(1, 4, 13), "DATA_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(1, 4, 14), "DATA_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 4, 15), "DATA_RPTT_SELECT", 1, 0, 2),
    MenuItem::number(MenuToken::new(1, 4, 16), "DATA_NAR_WIDTH", 2, 0, 20),
    MenuItem::number(MenuToken::new(1, 4, 17), "DATA_PSK_TONE", 1, 0, 2),
    MenuItem::number(MenuToken::new(1, 4, 18), "DATA_SHIFT_SSB", 4, 0, 3000),
    // EX0105: MODE RTTY
    MenuItem::signed(MenuToken::new(1, 5, 1), "RTTY_AF_TREBLE", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 5, 2), "RTTY_AF_MID", 3, -20, 10),
    MenuItem::signed(MenuToken::new(1, 5, 3), "RTTY_AF_BASS", 3, -20, 10),
    MenuItem::number(MenuToken::new(1, 5, 4), "RTTY_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 5, 5), "RTTY_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 5, 6), "RTTY_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(1, 5, 7), "RTTY_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(1, 5, 8), "RTTY_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 5, 9), "RTTY_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(1, 5, 10), "RTTY_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 5, 11), "RTTY_USB_OUT_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(1, 5, 12), "RTTY_RPTT_SELECT", 1, 0, 2),
    MenuItem::number(MenuToken::new(1, 5, 13), "RTTY_NAR_WIDTH", 2, 0, 20),
    MenuItem::number(MenuToken::new(1, 5, 14), "RTTY_MARK_FREQ", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 5, 15), "RTTY_SHIFT_FREQ", 1, 0, 3),
    MenuItem::number(MenuToken::new(1, 5, 16), "RTTY_POLARITY_TX", 1, 0, 1),
    // EX0106: DIGITAL
    MenuItem::number(MenuToken::new(1, 6, 1), "DIG_POPUP", 2, 0, 60),
    MenuItem::number(MenuToken::new(1, 6, 2), "DIG_LOC_SERVICE", 1, 0, 1),
    MenuItem::number(MenuToken::new(1, 6, 3), "DIG_STANDBY_BEEP", 1, 0, 1),
    // EX0201: MODE CW
    MenuItem::signed(MenuToken::new(2, 1, 1), "CW_AF_TREBLE", 3, -20, 10),
    MenuItem::signed(MenuToken::new(2, 1, 2), "CW_AF_MID", 3, -20, 10),
    MenuItem::signed(MenuToken::new(2, 1, 3), "CW_AF_BASS", 3, -20, 10),
    MenuItem::number(MenuToken::new(2, 1, 4), "CW_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(2, 1, 5), "CW_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(2, 1, 6), "CW_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(2, 1, 7), "CW_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(2, 1, 8), "CW_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 1, 9), "CW_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(2, 1, 10), "CW_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 1, 11), "CW_USB_OUT_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(2, 1, 12), "CW_RPTT_SELECT", 1, 0, 2),
    MenuItem::number(MenuToken::new(2, 1, 13), "CW_NAR_WIDTH", 2, 0, 20),
    MenuItem::number(MenuToken::new(2, 1, 14), "CW_PC_KEYING", 1, 0, 2),
    MenuItem::number(MenuToken::new(2, 1, 15), "CW_BK_IN_TYPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 1, 16), "CW_FREQ_DISPLAY", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 1, 17), "CW_QSK_DELAY", 1, 0, 3),
    MenuItem::number(MenuToken::new(2, 1, 18), "CW_INDICATOR", 1, 0, 1),
    // EX0202: KEYER
    MenuItem::number(MenuToken::new(2, 2, 1), "KEYER_TYPE", 1, 0, 5),
    MenuItem::number(MenuToken::new(2, 2, 2), "KEYER_DOT_DASH", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 2, 3), "KEYER_WEIGHT", 2, 0, 20),
    MenuItem::number(MenuToken::new(2, 2, 4), "KEYER_NUM_STYLE", 1, 0, 6),
    MenuItem::number(MenuToken::new(2, 2, 5), "KEYER_CONTEST_NUM", 4, 1, 9999),
    MenuItem::number(MenuToken::new(2, 2, 6), "KEYER_CW_MEM1", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 2, 7), "KEYER_CW_MEM2", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 2, 8), "KEYER_CW_MEM3", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 2, 9), "KEYER_CW_MEM4", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 2, 10), "KEYER_CW_MEM5", 1, 0, 1),
    MenuItem::number(MenuToken::new(2, 2, 11), "KEYER_REPEAT_INT", 2, 1, 60),
    // EX0301: GENERAL
    MenuItem::number(MenuToken::new(3, 1, 1), "GEN_BEEP_LEVEL", 3, 0, 100),
    MenuItem::number(MenuToken::new(3, 1, 2), "GEN_RF_SQL_VR", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 1, 3), "GEN_TUN_LIN_PORT", 1, 0, 3),
    MenuItem::number(MenuToken::new(3, 1, 4), "GEN_TUNER_SELECT", 1, 0, 3),
    MenuItem::number(MenuToken::new(3, 1, 5), "GEN_CAT1_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(3, 1, 6), "GEN_CAT1_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(3, 1, 7), "GEN_CAT1_STOP_BIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 1, 8), "GEN_CAT2_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(3, 1, 9), "GEN_CAT2_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(3, 1, 10), "GEN_CAT3_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(3, 1, 11), "GEN_CAT3_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(3, 1, 12), "GEN_TX_TIMEOUT", 2, 0, 30),
    MenuItem::signed(MenuToken::new(3, 1, 13), "GEN_REF_FREQ_ADJ", 3, -25, 25),
    MenuItem::number(MenuToken::new(3, 1, 14), "GEN_CHARGE_CTRL", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 1, 15), "GEN_SUB_BAND_MUTE", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 1, 16), "GEN_SPEAKER_SEL", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 1, 17), "GEN_DITHER", 1, 0, 1),
    // EX0302: BAND-SCAN
    MenuItem::number(MenuToken::new(3, 2, 1), "SCAN_QMB_CH", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 2, 2), "SCAN_BAND_STACK", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 2, 3), "SCAN_BAND_EDGE", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 2, 4), "SCAN_RESUME", 1, 0, 4),
    // EX0303: RX-DSP
    MenuItem::number(MenuToken::new(3, 3, 1), "DSP_IF_NOTCH_W", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 3, 2), "DSP_NB_REJECTION", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 3, 3), "DSP_NB_WIDTH", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 3, 4), "DSP_APF_WIDTH", 1, 0, 2),
    MenuItem::signed(MenuToken::new(3, 3, 5), "DSP_CONTOUR_LVL", 3, -40, 20),
    MenuItem::number(MenuToken::new(3, 3, 6), "DSP_CONTOUR_W", 2, 1, 11),
    // EX0304: TX AUDIO
    MenuItem::number(MenuToken::new(3, 4, 1), "TX_AMC_RELEASE", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 4, 2), "TX_EQ1_FREQ", 2, 0, 7),
    MenuItem::signed(MenuToken::new(3, 4, 3), "TX_EQ1_LEVEL", 3, -20, 10),
    MenuItem::number(MenuToken::new(3, 4, 4), "TX_EQ1_BWTH", 2, 0, 10),
    MenuItem::number(MenuToken::new(3, 4, 5), "TX_EQ2_FREQ", 2, 0, 9),
    MenuItem::signed(MenuToken::new(3, 4, 6), "TX_EQ2_LEVEL", 3, -20, 10),
    MenuItem::number(MenuToken::new(3, 4, 7), "TX_EQ2_BWTH", 2, 0, 10),
    MenuItem::number(MenuToken::new(3, 4, 8), "TX_EQ3_FREQ", 2, 0, 18),
    MenuItem::signed(MenuToken::new(3, 4, 9), "TX_EQ3_LEVEL", 3, -20, 10),
    MenuItem::number(MenuToken::new(3, 4, 10), "TX_EQ3_BWTH", 2, 0, 10),
    MenuItem::number(MenuToken::new(3, 4, 11), "TX_P_EQ1_FREQ", 2, 0, 7),
    MenuItem::signed(MenuToken::new(3, 4, 12), "TX_P_EQ1_LEVEL", 3, -20, 10),
    MenuItem::number(MenuToken::new(3, 4, 13), "TX_P_EQ1_BWTH", 2, 0, 10),
    MenuItem::number(MenuToken::new(3, 4, 14), "TX_P_EQ2_FREQ", 2, 0, 9),
    MenuItem::signed(MenuToken::new(3, 4, 15), "TX_P_EQ2_LEVEL", 3, -20, 10),
    MenuItem::number(MenuToken::new(3, 4, 16), "TX_P_EQ2_BWTH", 2, 0, 10),
    MenuItem::number(MenuToken::new(3, 4, 17), "TX_P_EQ3_FREQ", 2, 0, 18),
    MenuItem::signed(MenuToken::new(3, 4, 18), "TX_P_EQ3_LEVEL", 3, -20, 10),
    MenuItem::number(MenuToken::new(3, 4, 19), "TX_P_EQ3_BWTH", 2, 0, 10),
    // EX0305: TX GENERAL (Field Head)
    MenuItem::number(MenuToken::new(3, 5, 1), "TXGEN_MAX_PWR_BAT", 3, 5, 60),
    MenuItem::number(MenuToken::new(3, 5, 2), "TXGEN_QRP_MODE", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 5, 3), "TXGEN_HF_MAX_PWR", 3, 5, 10),
    MenuItem::number(MenuToken::new(3, 5, 4), "TXGEN_50M_MAX_PWR", 3, 5, 10),
    MenuItem::number(MenuToken::new(3, 5, 5), "TXGEN_70M_MAX_PWR", 3, 5, 60),
    MenuItem::number(MenuToken::new(3, 5, 6), "TXGEN_144M_MAX_PWR", 3, 5, 100),
    MenuItem::number(MenuToken::new(3, 5, 7), "TXGEN_430M_MAX_PWR", 3, 5, 100),
    MenuItem::number(MenuToken::new(3, 5, 8), "TXGEN_AM_HF_MAX", 3, 5, 25),
    MenuItem::number(MenuToken::new(3, 5, 9), "TXGEN_AM_VU_MAX", 3, 5, 25),
    MenuItem::number(MenuToken::new(3, 5, 10), "TXGEN_VOX_SELECT", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 5, 11), "TXGEN_EMERG_TX", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 5, 12), "TXGEN_TX_INHIBIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 5, 13), "TXGEN_METER_DET", 1, 0, 1),
    // EX0306: KEY/DIAL
    MenuItem::number(MenuToken::new(3, 6, 1), "DIAL_SSB_CW_STEP", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 6, 2), "DIAL_RTTY_PSK_STEP", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 6, 3), "DIAL_FM_STEP", 1, 0, 6),
    MenuItem::number(MenuToken::new(3, 6, 4), "DIAL_CH_STEP", 1, 0, 3),
    MenuItem::number(MenuToken::new(3, 6, 5), "DIAL_AM_CH_STEP", 1, 0, 5),
    MenuItem::number(MenuToken::new(3, 6, 6), "DIAL_FM_CH_STEP", 1, 0, 5),
    MenuItem::number(MenuToken::new(3, 6, 7), "DIAL_MAIN_STEPS", 1, 0, 2),
    MenuItem::number(MenuToken::new(3, 6, 8), "DIAL_MIC_P1", 2, 0, 20),
    MenuItem::number(MenuToken::new(3, 6, 9), "DIAL_MIC_P2", 2, 0, 20),
    MenuItem::number(MenuToken::new(3, 6, 10), "DIAL_MIC_P3", 2, 0, 20),
    MenuItem::number(MenuToken::new(3, 6, 11), "DIAL_MIC_P4", 2, 0, 20),
    MenuItem::number(MenuToken::new(3, 6, 12), "DIAL_MIC_UP", 2, 0, 20),
    MenuItem::number(MenuToken::new(3, 6, 13), "DIAL_MIC_DOWN", 2, 0, 20),
    MenuItem::number(MenuToken::new(3, 6, 14), "DIAL_MIC_SCAN", 1, 0, 1),
    // EX0307: OPTION (SPA-1)
    MenuItem::number(MenuToken::new(3, 7, 1), "OPT_TUNER_ANT1", 1, 0, 3)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 2), "OPT_TUNER_ANT2", 1, 0, 3)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 3), "OPT_ANT2_OP", 1, 0, 2)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 4), "OPT_HF_ANT_SEL", 1, 0, 1)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 5), "OPT_HF_MAX_PWR", 3, 5, 100)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 6), "OPT_50M_MAX_PWR", 3, 5, 100)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 7), "OPT_70M_MAX_PWR", 3, 5, 50)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 8), "OPT_144M_MAX_PWR", 3, 5, 50)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 9), "OPT_430M_MAX_PWR", 3, 5, 50)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 10), "OPT_AM_MAX_PWR", 3, 5, 25)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 11), "OPT_AM_VU_MAX_PWR", 3, 5, 13)
        .requiring(OptionalHardware::Amplifier),
    MenuItem::number(MenuToken::new(3, 7, 12), "OPT_GPS", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 7, 13), "OPT_GPS_PINNING", 1, 0, 1),
    MenuItem::number(MenuToken::new(3, 7, 14), "OPT_GPS_BAUDRATE", 1, 0, 4),
    // EX0401: DISPLAY
    MenuItem::text(MenuToken::new(4, 1, 1), "DISP_MY_CALL", 10),
    MenuItem::number(MenuToken::new(4, 1, 2), "DISP_MY_CALL_TIME", 1, 0, 5),
    MenuItem::number(MenuToken::new(4, 1, 3), "DISP_POPUP_TIME", 1, 0, 2),
    MenuItem::number(MenuToken::new(4, 1, 4), "DISP_SCREEN_SAVER", 1, 0, 6),
    MenuItem::number(MenuToken::new(4, 1, 5), "DISP_SAVER_BAT", 1, 0, 6),
    MenuItem::number(MenuToken::new(4, 1, 6), "DISP_SAVER_TYPE", 1, 0, 2),
    MenuItem::number(MenuToken::new(4, 1, 7), "DISP_AUTO_PWR_OFF", 1, 0, 24),
    MenuItem::number(MenuToken::new(4, 1, 8), "DISP_LED_DIMMER", 2, 0, 20),
    // EX0402: UNIT
    MenuItem::number(MenuToken::new(4, 2, 1), "UNIT_POSITION", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 2, 2), "UNIT_DISTANCE", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 2, 3), "UNIT_SPEED", 1, 0, 2),
    MenuItem::number(MenuToken::new(4, 2, 4), "UNIT_ALTITUDE", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 2, 5), "UNIT_TEMP", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 2, 6), "UNIT_RAIN", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 2, 7), "UNIT_WIND", 1, 0, 1),
    // EX0403: SCOPE
    MenuItem::number(MenuToken::new(4, 3, 1), "SCOPE_RBW", 1, 0, 2),
    MenuItem::number(MenuToken::new(4, 3, 2), "SCOPE_CTR", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 3, 3), "SCOPE_2D_SENS", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 3, 4), "SCOPE_3DSS_SENS", 1, 0, 1),
    MenuItem::number(MenuToken::new(4, 3, 5), "SCOPE_AVERAGE", 1, 0, 3),
    // EX0404: VFO IND COLOR
    MenuItem::number(MenuToken::new(4, 4, 1), "VMI_COLOR_VFO", 1, 0, 3),
    MenuItem::number(MenuToken::new(4, 4, 2), "VMI_COLOR_MEM", 1, 0, 3),
    MenuItem::number(MenuToken::new(4, 4, 3), "VMI_COLOR_CLAR", 1, 0, 1),
    // EX0501: DATE&TIME
    MenuItem::signed(MenuToken::new(5, 1, 1), "DT_TIMEZONE", 4, -120, 140),
    MenuItem::number(MenuToken::new(5, 1, 7), "DT_GPS_TIME_SET", 1, 0, 1),
    MenuItem::number(MenuToken::new(5, 1, 8), "DT_MY_POSITION", 1, 0, 1),
    // EX0601: GENERAL
    MenuItem::number(MenuToken::new(6, 1, 1), "APRS_MODEM_SEL", 1, 0, 3),
    MenuItem::number(MenuToken::new(6, 1, 2), "APRS_MODEM_TYPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(6, 1, 3), "APRS_AF_MUTE", 1, 0, 1),
    MenuItem::number(MenuToken::new(6, 1, 4), "APRS_TX_DELAY", 1, 0, 6),
    MenuItem::text(MenuToken::new(6, 1, 5), "APRS_CALLSIGN", 8),
    MenuItem::text(MenuToken::new(6, 1, 9), "APRS_DEST", 6),
    // EX0602: MSG TEMPLATE
    MenuItem::text(MenuToken::new(6, 2, 1), "APRS_MSG_TEXT1", 16),
    MenuItem::text(MenuToken::new(6, 2, 2), "APRS_MSG_TEXT2", 16),
    MenuItem::text(MenuToken::new(6, 2, 3), "APRS_MSG_TEXT3", 16),
    MenuItem::text(MenuToken::new(6, 2, 4), "APRS_MSG_TEXT4", 16),
    MenuItem::text(MenuToken::new(6, 2, 5), "APRS_MSG_TEXT5", 16),
    MenuItem::text(MenuToken::new(6, 2, 6), "APRS_MSG_TEXT6", 16),
    MenuItem::text(MenuToken::new(6, 2, 7), "APRS_MSG_TEXT7", 16),
    MenuItem::text(MenuToken::new(6, 2, 8), "APRS_MSG_TEXT8", 16),
    // EX0603: MY SYMBOL
    MenuItem::number(MenuToken::new(6, 3, 1), "APRS_MY_SYMBOL", 1, 0, 3),
    MenuItem::text(MenuToken::new(6, 3, 2), "APRS_ICON1", 2),
    MenuItem::text(MenuToken::new(6, 3, 3), "APRS_ICON2", 2),
    MenuItem::text(MenuToken::new(6, 3, 4), "APRS_ICON3", 2),
    MenuItem::text(MenuToken::new(6, 3, 5), "APRS_ICON_USER", 2),
    // EX0604: DIGI PATH
    MenuItem::number(MenuToken::new(6, 4, 1), "APRS_PATH_SEL", 1, 0, 2),
    // EX0701: BEACON SET
    MenuItem::number(MenuToken::new(7, 1, 1), "BCN_TYPE", 1, 0, 2),
    MenuItem::number(MenuToken::new(7, 1, 2), "BCN_INFO_AMBIG", 1, 0, 4),
    MenuItem::number(MenuToken::new(7, 1, 3), "BCN_SPEED_COURSE", 1, 0, 1),
    MenuItem::number(MenuToken::new(7, 1, 4), "BCN_ALTITUDE", 1, 0, 1),
    MenuItem::number(MenuToken::new(7, 1, 5), "BCN_POS_COMMENT", 2, 0, 14),
    MenuItem::number(MenuToken::new(7, 1, 6), "BCN_EMERGENCY", 1, 0, 1),
    // EX0702: AUTO BEACON
    MenuItem::number(MenuToken::new(7, 2, 1), "BCN_INTERVAL", 1, 0, 9),
    MenuItem::number(MenuToken::new(7, 2, 2), "BCN_PROPORTIONAL", 1, 0, 1),
    MenuItem::number(MenuToken::new(7, 2, 3), "BCN_DECAY", 1, 0, 1),
    MenuItem::number(MenuToken::new(7, 2, 4), "BCN_AUTO_LOW_SPD", 2, 1, 99),
    MenuItem::number(MenuToken::new(7, 2, 5), "BCN_DELAY", 3, 5, 180),
    // EX0703: SmartBeac
    MenuItem::number(MenuToken::new(7, 3, 1), "SMART_LOW_SPD", 2, 2, 30),
    MenuItem::number(MenuToken::new(7, 3, 2), "SMART_HIGH_SPD", 2, 3, 90),
    MenuItem::number(MenuToken::new(7, 3, 3), "SMART_SLOW_RATE", 3, 1, 100),
    MenuItem::number(MenuToken::new(7, 3, 4), "SMART_FAST_RATE", 3, 10, 180),
    MenuItem::number(MenuToken::new(7, 3, 5), "SMART_TURN_ANGLE", 2, 5, 90),
    MenuItem::number(MenuToken::new(7, 3, 6), "SMART_TURN_SLOPE", 3, 1, 255),
    MenuItem::number(MenuToken::new(7, 3, 7), "SMART_TURN_TIME", 3, 5, 180),
    // EX0704: BEACON TEXT
    MenuItem::number(MenuToken::new(7, 4, 1), "BCN_TEXT_SEL", 1, 0, 5),
    MenuItem::number(MenuToken::new(7, 4, 2), "BCN_TX_RATE", 1, 0, 7),
    MenuItem::number(MenuToken::new(7, 4, 3), "BCN_FREQ", 1, 0, 2),
    MenuItem::text(MenuToken::new(7, 4, 4), "BCN_STATUS1", 60),
    MenuItem::text(MenuToken::new(7, 4, 5), "BCN_STATUS2", 60),
    MenuItem::text(MenuToken::new(7, 4, 6), "BCN_STATUS3", 60),
    MenuItem::text(MenuToken::new(7, 4, 7), "BCN_STATUS4", 60),
    MenuItem::text(MenuToken::new(7, 4, 8), "BCN_STATUS5", 60),
    // EX0801: LIST SETTING
    MenuItem::number(MenuToken::new(8, 1, 1), "FILT_LIST_SORT", 1, 0, 2),
    // EX0802: STATION LIST
    MenuItem::number(MenuToken::new(8, 2, 1), "FILT_MIC_E", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 2), "FILT_POSITION", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 3), "FILT_WEATHER", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 4), "FILT_OBJECT", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 5), "FILT_ITEM", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 6), "FILT_STATUS", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 7), "FILT_OTHER", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 2, 8), "FILT_ALTNET", 1, 0, 1),
    // EX0803: POPUP
    MenuItem::number(MenuToken::new(8, 3, 1), "FILT_POPUP_BCN", 1, 0, 4),
    MenuItem::number(MenuToken::new(8, 3, 2), "FILT_POPUP_MSG", 1, 0, 4),
    MenuItem::number(MenuToken::new(8, 3, 3), "FILT_POPUP_MYPACKET", 1, 0, 1),
    // EX0804: RINGER
    MenuItem::number(MenuToken::new(8, 4, 1), "RING_TX_BCN", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 4, 2), "RING_RX_BCN", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 4, 3), "RING_TX_MSG", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 4, 4), "RING_RX_MSG", 1, 0, 1),
    MenuItem::number(MenuToken::new(8, 4, 7), "RING_MY_PACKET", 1, 0, 1),
    // EX0806: MSG FILTER
    MenuItem::text(MenuToken::new(8, 6, 1), "MSGFILT_GRP1", 9),
    MenuItem::text(MenuToken::new(8, 6, 2), "MSGFILT_GRP2", 9),
    MenuItem::text(MenuToken::new(8, 6, 3), "MSGFILT_GRP3", 9),
    MenuItem::text(MenuToken::new(8, 6, 4), "MSGFILT_GRP4", 9),
    MenuItem::text(MenuToken::new(8, 6, 5), "MSGFILT_GRP5", 9),
    MenuItem::text(MenuToken::new(8, 6, 6), "MSGFILT_GRP6", 9),
    MenuItem::text(MenuToken::new(8, 6, 7), "MSGFILT_BULLETIN1", 9),
    MenuItem::text(MenuToken::new(8, 6, 8), "MSGFILT_BULLETIN2", 9),
    MenuItem::text(MenuToken::new(8, 6, 9), "MSGFILT_BULLETIN3", 9),
    MenuItem::text(MenuToken::new(9, 1, 1), "PRE1_NAME", 12),
    MenuItem::number(MenuToken::new(9, 1, 2), "PRE1_CAT1_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 1, 3), "PRE1_CAT1_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 1, 4), "PRE1_STOP_BIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 1, 5), "PRE1_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 1, 6), "PRE1_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 1, 7), "PRE1_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 1, 8), "PRE1_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(9, 1, 9), "PRE1_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 1, 10), "PRE1_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(9, 1, 11), "PRE1_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 1, 12), "PRE1_USB_OUT_LVL", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 1, 13), "PRE1_TX_BPF", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 1, 14), "PRE1_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 1, 15), "PRE1_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 1, 16), "PRE1_RPTT_SELECT", 1, 0, 3),
    MenuItem::text(MenuToken::new(9, 2, 1), "PRE2_NAME", 12),
    MenuItem::number(MenuToken::new(9, 2, 2), "PRE2_CAT1_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 2, 3), "PRE2_CAT1_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 2, 4), "PRE2_STOP_BIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 2, 5), "PRE2_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 2, 6), "PRE2_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 2, 7), "PRE2_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 2, 8), "PRE2_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(9, 2, 9), "PRE2_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 2, 10), "PRE2_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(9, 2, 11), "PRE2_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 2, 12), "PRE2_USB_OUT_LVL", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 2, 13), "PRE2_TX_BPF", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 2, 14), "PRE2_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 2, 15), "PRE2_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 2, 16), "PRE2_RPTT_SELECT", 1, 0, 3),
    MenuItem::text(MenuToken::new(9, 3, 1), "PRE3_NAME", 12),
    MenuItem::number(MenuToken::new(9, 3, 2), "PRE3_CAT1_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 3, 3), "PRE3_CAT1_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 3, 4), "PRE3_STOP_BIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 3, 5), "PRE3_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 3, 6), "PRE3_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 3, 7), "PRE3_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 3, 8), "PRE3_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(9, 3, 9), "PRE3_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 3, 10), "PRE3_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(9, 3, 11), "PRE3_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 3, 12), "PRE3_USB_OUT_LVL", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 3, 13), "PRE3_TX_BPF", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 3, 14), "PRE3_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 3, 15), "PRE3_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 3, 16), "PRE3_RPTT_SELECT", 1, 0, 3),
    MenuItem::text(MenuToken::new(9, 4, 1), "PRE4_NAME", 12),
    MenuItem::number(MenuToken::new(9, 4, 2), "PRE4_CAT1_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 4, 3), "PRE4_CAT1_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 4, 4), "PRE4_STOP_BIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 4, 5), "PRE4_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 4, 6), "PRE4_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 4, 7), "PRE4_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 4, 8), "PRE4_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(9, 4, 9), "PRE4_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 4, 10), "PRE4_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(9, 4, 11), "PRE4_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 4, 12), "PRE4_USB_OUT_LVL", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 4, 13), "PRE4_TX_BPF", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 4, 14), "PRE4_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 4, 15), "PRE4_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 4, 16), "PRE4_RPTT_SELECT", 1, 0, 3),
    MenuItem::text(MenuToken::new(9, 5, 1), "PRE5_NAME", 12),
    MenuItem::number(MenuToken::new(9, 5, 2), "PRE5_CAT1_RATE", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 5, 3), "PRE5_CAT1_TIMEOUT", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 5, 4), "PRE5_STOP_BIT", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 5, 5), "PRE5_AGC_FAST", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 5, 6), "PRE5_AGC_MID", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 5, 7), "PRE5_AGC_SLOW", 4, 20, 4000),
    MenuItem::number(MenuToken::new(9, 5, 8), "PRE5_LCUT_FREQ", 2, 0, 19),
    MenuItem::number(MenuToken::new(9, 5, 9), "PRE5_LCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 5, 10), "PRE5_HCUT_FREQ", 2, 0, 67),
    MenuItem::number(MenuToken::new(9, 5, 11), "PRE5_HCUT_SLOPE", 1, 0, 1),
    MenuItem::number(MenuToken::new(9, 5, 12), "PRE5_USB_OUT_LVL", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 5, 13), "PRE5_TX_BPF", 1, 0, 4),
    MenuItem::number(MenuToken::new(9, 5, 14), "PRE5_MOD_SOURCE", 1, 0, 3),
    MenuItem::number(MenuToken::new(9, 5, 15), "PRE5_USB_MOD_GAIN", 3, 0, 100),
    MenuItem::number(MenuToken::new(9, 5, 16), "PRE5_RPTT_SELECT", 1, 0, 3),
    MenuItem::number(MenuToken::new(11, 1, 1), "BT_ENABLE", 1, 0, 1),
    MenuItem::number(MenuToken::new(11, 1, 4), "BT_AUDIO", 1, 0, 1),];

/// The FTX-1 menu as a lookup table.
pub fn ftx1_menu() -> MenuTable {
    MenuTable::new(FTX1_MENU)
}
