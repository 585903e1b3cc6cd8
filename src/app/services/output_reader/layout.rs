//! Column layout of SWAT output files
//!
//! Every data row of `output.rch`, `output.sub` and `output.hru` holds one
//! area (reach, subbasin or HRU) at one time step. Spans are 0-indexed and
//! half-open.

use crate::{Error, Result};
use serde::Serialize;
use std::str::FromStr;

/// Character span of one output column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Output file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputKind {
    /// `output.rch`, one row per reach
    Reach,
    /// `output.sub`, one row per subbasin
    Subbasin,
    /// `output.hru`, one row per HRU
    Hru,
}

impl OutputKind {
    pub const ALL: [OutputKind; 3] = [OutputKind::Reach, OutputKind::Subbasin, OutputKind::Hru];

    pub fn file_name(&self) -> &'static str {
        match self {
            OutputKind::Reach => "output.rch",
            OutputKind::Subbasin => "output.sub",
            OutputKind::Hru => "output.hru",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Reach => "rch",
            OutputKind::Subbasin => "sub",
            OutputKind::Hru => "hru",
        }
    }

    /// Column holding the area id
    pub fn area_span(&self) -> ColumnSpan {
        match self {
            OutputKind::Reach | OutputKind::Subbasin => ColumnSpan::new(7, 11),
            OutputKind::Hru => ColumnSpan::new(4, 8),
        }
    }

    /// Column holding the area size in km2
    pub fn area_size_span(&self) -> ColumnSpan {
        match self {
            OutputKind::Reach => ColumnSpan::new(26, 37),
            OutputKind::Subbasin => ColumnSpan::new(24, 34),
            OutputKind::Hru => ColumnSpan::new(34, 42),
        }
    }

    /// Named output columns in row order
    pub fn columns(&self) -> &'static [(&'static str, ColumnSpan)] {
        match self {
            OutputKind::Reach => REACH_COLUMNS,
            OutputKind::Subbasin => SUBBASIN_COLUMNS,
            OutputKind::Hru => HRU_COLUMNS,
        }
    }

    /// Span of a named output column
    ///
    /// # Errors
    /// `Error::UnknownParameter` if the kind has no such column
    pub fn column(&self, name: &str) -> Result<ColumnSpan> {
        let wanted = name.trim();
        self.columns()
            .iter()
            .find(|(column, _)| *column == wanted)
            .map(|(_, span)| *span)
            .ok_or_else(|| Error::unknown_parameter(self, name))
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

impl FromStr for OutputKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().trim_start_matches("output.").to_ascii_lowercase();
        match normalized.trim_start_matches('.') {
            "rch" | "reach" => Ok(OutputKind::Reach),
            "sub" | "subbasin" => Ok(OutputKind::Subbasin),
            "hru" => Ok(OutputKind::Hru),
            _ => Err(Error::data_validation(format!(
                "Unknown output kind '{}': must be rch, sub or hru",
                s
            ))),
        }
    }
}

const REACH_COLUMNS: &[(&str, ColumnSpan)] = &[
    ("RCH", ColumnSpan::new(7, 11)),
    ("GIS", ColumnSpan::new(12, 19)),
    ("MON", ColumnSpan::new(21, 25)),
    ("FLOW_IN", ColumnSpan::new(38, 49)),
    ("FLOW_OUT", ColumnSpan::new(50, 61)),
    ("EVAP", ColumnSpan::new(62, 73)),
    ("TLOSS", ColumnSpan::new(74, 85)),
    ("SED_IN", ColumnSpan::new(86, 97)),
    ("SED_OUT", ColumnSpan::new(98, 109)),
    ("SEDCONC", ColumnSpan::new(110, 121)),
    ("ORGN_IN", ColumnSpan::new(122, 133)),
    ("ORGN_OUT", ColumnSpan::new(134, 145)),
    ("ORGP_IN", ColumnSpan::new(146, 157)),
    ("ORGP_OUT", ColumnSpan::new(158, 169)),
    ("NO3_IN", ColumnSpan::new(170, 181)),
    ("NO3_OUT", ColumnSpan::new(182, 193)),
    ("NH4_IN", ColumnSpan::new(194, 205)),
    ("NH4_OUT", ColumnSpan::new(206, 217)),
    ("NO2_IN", ColumnSpan::new(218, 229)),
    ("NO2_OUT", ColumnSpan::new(230, 241)),
    ("MINP_IN", ColumnSpan::new(242, 253)),
    ("MINP_OUT", ColumnSpan::new(254, 265)),
    ("CHLA_IN", ColumnSpan::new(266, 277)),
    ("CHLA_OUT", ColumnSpan::new(278, 289)),
    ("CBOD_IN", ColumnSpan::new(290, 301)),
    ("CBOD_OUT", ColumnSpan::new(302, 313)),
    ("DISOX_IN", ColumnSpan::new(314, 325)),
    ("DISOX_OUT", ColumnSpan::new(326, 337)),
    ("SOLPST_IN", ColumnSpan::new(338, 349)),
    ("SOLPST_OUT", ColumnSpan::new(350, 361)),
    ("SORPST_IN", ColumnSpan::new(362, 373)),
    ("SORPST_OUT", ColumnSpan::new(374, 385)),
    ("REACTPST", ColumnSpan::new(386, 397)),
    ("VOLPST", ColumnSpan::new(398, 409)),
    ("SETTLPST", ColumnSpan::new(410, 421)),
    ("RESUSP_PST", ColumnSpan::new(422, 433)),
    ("DIFFUSEPST", ColumnSpan::new(434, 445)),
    ("REACBEDPST", ColumnSpan::new(446, 457)),
    ("BURYPST", ColumnSpan::new(458, 469)),
    ("BED_PST", ColumnSpan::new(470, 481)),
    ("BACTP_OUT", ColumnSpan::new(482, 493)),
    ("BACTLP_OUT", ColumnSpan::new(494, 505)),
    ("CMETAL#1", ColumnSpan::new(506, 517)),
    ("CMETAL#2", ColumnSpan::new(518, 529)),
    ("CMETAL#3", ColumnSpan::new(530, 541)),
];

const SUBBASIN_COLUMNS: &[(&str, ColumnSpan)] = &[
    ("SUB", ColumnSpan::new(7, 12)),
    ("GIS", ColumnSpan::new(13, 18)),
    ("MON", ColumnSpan::new(19, 23)),
    ("PRECIP", ColumnSpan::new(35, 44)),
    ("SNOMELT", ColumnSpan::new(45, 54)),
    ("PET", ColumnSpan::new(55, 64)),
    ("ET", ColumnSpan::new(65, 74)),
    ("SW", ColumnSpan::new(75, 84)),
    ("PERC", ColumnSpan::new(85, 94)),
    ("SURQ", ColumnSpan::new(95, 104)),
    ("GW_Q", ColumnSpan::new(105, 114)),
    ("WYLD", ColumnSpan::new(115, 124)),
    ("SYLD", ColumnSpan::new(125, 134)),
    ("ORGN", ColumnSpan::new(135, 144)),
    ("ORGP", ColumnSpan::new(145, 154)),
    ("NSURQ", ColumnSpan::new(155, 164)),
    ("SOLP", ColumnSpan::new(165, 174)),
    ("SEDP", ColumnSpan::new(175, 184)),
    ("LAT_Q", ColumnSpan::new(185, 194)),
    ("LATNO3", ColumnSpan::new(195, 204)),
];

const HRU_COLUMNS: &[(&str, ColumnSpan)] = &[
    ("LULC", ColumnSpan::new(0, 3)),
    ("HRU", ColumnSpan::new(4, 8)),
    ("GIS", ColumnSpan::new(9, 19)),
    ("SUB", ColumnSpan::new(20, 23)),
    ("MGT", ColumnSpan::new(24, 28)),
    ("MON", ColumnSpan::new(29, 33)),
    ("PRECIP", ColumnSpan::new(44, 54)),
    ("SNOFALL", ColumnSpan::new(55, 64)),
    ("SNOMELT", ColumnSpan::new(65, 74)),
    ("IRR", ColumnSpan::new(75, 84)),
    ("PET", ColumnSpan::new(85, 94)),
    ("ET", ColumnSpan::new(95, 104)),
    ("SW_INIT", ColumnSpan::new(105, 114)),
    ("SW_END", ColumnSpan::new(113, 122)),
    ("PERC", ColumnSpan::new(123, 132)),
    ("GW_RCHG", ColumnSpan::new(133, 142)),
    ("DA_RCHG", ColumnSpan::new(143, 152)),
    ("REVAP", ColumnSpan::new(153, 162)),
    ("SA_IRR", ColumnSpan::new(163, 172)),
    ("DA_IRR", ColumnSpan::new(173, 182)),
    ("SA_ST", ColumnSpan::new(183, 192)),
    ("DA_ST", ColumnSpan::new(193, 202)),
    ("SURQ_GEN", ColumnSpan::new(203, 212)),
    ("SURQ_CNT", ColumnSpan::new(213, 222)),
    ("TLOSS", ColumnSpan::new(223, 232)),
    ("LATQ", ColumnSpan::new(233, 242)),
    ("GW_Q", ColumnSpan::new(243, 252)),
    ("WQLD", ColumnSpan::new(253, 262)),
    ("DAILYCN", ColumnSpan::new(263, 272)),
    ("TMP_AV", ColumnSpan::new(273, 282)),
    ("TMP_MX", ColumnSpan::new(283, 292)),
    ("TMP_MN", ColumnSpan::new(293, 302)),
    ("SOL_TMP", ColumnSpan::new(303, 312)),
    ("SOLAR", ColumnSpan::new(313, 322)),
    ("SYLD", ColumnSpan::new(323, 332)),
    ("USLE", ColumnSpan::new(333, 342)),
    ("N_APP", ColumnSpan::new(343, 352)),
    ("P_APP", ColumnSpan::new(353, 362)),
    ("NAUTO", ColumnSpan::new(363, 372)),
    ("PAUTO", ColumnSpan::new(373, 382)),
    ("NGRZ", ColumnSpan::new(383, 392)),
    ("PGRZ", ColumnSpan::new(393, 402)),
    ("NCFRT", ColumnSpan::new(403, 412)),
    ("PCFRT", ColumnSpan::new(413, 422)),
    ("NRAIN", ColumnSpan::new(423, 432)),
    ("NFIX", ColumnSpan::new(433, 442)),
    ("F-MN", ColumnSpan::new(443, 452)),
    ("A-MN", ColumnSpan::new(453, 462)),
    ("A-SN", ColumnSpan::new(463, 472)),
    ("F-MP", ColumnSpan::new(473, 482)),
    ("AO-LP", ColumnSpan::new(483, 492)),
    ("L-AP", ColumnSpan::new(493, 502)),
    ("A-SP", ColumnSpan::new(503, 512)),
    ("DNIT", ColumnSpan::new(513, 522)),
    ("NUP", ColumnSpan::new(523, 532)),
    ("PUP", ColumnSpan::new(533, 542)),
    ("ORGN", ColumnSpan::new(543, 552)),
    ("ORGP", ColumnSpan::new(553, 562)),
    ("SEDP", ColumnSpan::new(563, 572)),
    ("NSURQ", ColumnSpan::new(573, 582)),
    ("NLATQ", ColumnSpan::new(583, 592)),
    ("NO3L", ColumnSpan::new(593, 602)),
    ("NO3GW", ColumnSpan::new(603, 612)),
    ("SOLP", ColumnSpan::new(613, 622)),
    ("P_GW", ColumnSpan::new(623, 632)),
    ("W_STRS", ColumnSpan::new(633, 642)),
    ("TMP-STRS", ColumnSpan::new(643, 652)),
    ("N_STRS", ColumnSpan::new(653, 662)),
    ("P_STRS", ColumnSpan::new(663, 672)),
    ("BIOM", ColumnSpan::new(673, 682)),
    ("LAI", ColumnSpan::new(683, 692)),
    ("YLD", ColumnSpan::new(693, 702)),
    ("BACTP", ColumnSpan::new(703, 712)),
    ("BACTLP", ColumnSpan::new(713, 722)),
];
