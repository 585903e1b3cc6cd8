//! Coordinate tables of the SWAT2012 input files
//!
//! Coordinates are written as `(line, first column, last column, decimals)`
//! with 1-indexed inclusive columns, the way the SWAT input documentation
//! lists them. `scalar` and `layered` convert them to 0-indexed half-open
//! spans.

use super::{layered, scalar};
use crate::app::models::FileKind;

parameter_registry! {
    /// Basin-wide parameters of `basins.bsn`
    BasinParameter, FileKind::Basin, {
        Sftmp => "SFTMP", scalar(4, 1, 16, 4),
        Smtmp => "SMTMP", scalar(5, 1, 16, 4),
        Smfmx => "SMFMX", scalar(6, 1, 16, 4),
        Smfmn => "SMFMN", scalar(7, 1, 16, 4),
        Timp => "TIMP", scalar(8, 1, 16, 4),
        Snocovmx => "SNOCOVMX", scalar(9, 1, 16, 4),
        Sno50cov => "SNO50COV", scalar(10, 1, 16, 4),
        Ipet => "IPET", scalar(11, 1, 16, 0),
        Esco => "ESCO", scalar(13, 1, 16, 4),
        Epco => "EPCO", scalar(14, 1, 16, 4),
        Evlai => "EVLAI", scalar(15, 1, 16, 4),
        Ffcb => "FFCB", scalar(16, 1, 16, 4),
        Ievent => "IEVENT", scalar(18, 1, 16, 0),
        Icrk => "ICRK", scalar(19, 1, 16, 0),
        Surlag => "SURLAG", scalar(20, 1, 16, 4),
        AdjPkr => "ADJ_PKR", scalar(21, 1, 16, 4),
        PrfBsn => "PRF_BSN", scalar(22, 1, 16, 4),
        Spcon => "SPCON", scalar(23, 1, 16, 6),
        Spexp => "SPEXP", scalar(24, 1, 16, 4),
        Rcn => "RCN", scalar(26, 1, 16, 4),
        Cmn => "CMN", scalar(27, 1, 16, 6),
        NUpdis => "N_UPDIS", scalar(28, 1, 16, 4),
        PUpdis => "P_UPDIS", scalar(29, 1, 16, 4),
        Nperco => "NPERCO", scalar(30, 1, 16, 4),
        Pperco => "PPERCO", scalar(31, 1, 16, 4),
        Phoskd => "PHOSKD", scalar(32, 1, 16, 4),
        Psp => "PSP", scalar(33, 1, 16, 4),
        Rsdco => "RSDCO", scalar(34, 1, 16, 4),
        Percop => "PERCOP", scalar(36, 1, 16, 4),
        Isubwq => "ISUBWQ", scalar(38, 1, 16, 0),
        Wdpq => "WDPQ", scalar(40, 1, 16, 4),
        Wgpq => "WGPQ", scalar(41, 1, 16, 4),
        Wdlpq => "WDLPQ", scalar(42, 1, 16, 4),
        Wglpq => "WGLPQ", scalar(43, 1, 16, 4),
        Wdps => "WDPS", scalar(44, 1, 16, 4),
        Wgps => "WGPS", scalar(45, 1, 16, 4),
        Wdlps => "WDLPS", scalar(46, 1, 16, 4),
        Wglps => "WGLPS", scalar(47, 1, 16, 4),
        Bactkdq => "BACTKDQ", scalar(48, 1, 16, 4),
        Thbact => "THBACT", scalar(49, 1, 16, 4),
        WofP => "WOF_P", scalar(50, 1, 16, 4),
        WofLp => "WOF_LP", scalar(51, 1, 16, 4),
        Wdpf => "WDPF", scalar(52, 1, 16, 4),
        Wgpf => "WGPF", scalar(53, 1, 16, 4),
        Wdlpf => "WDLPF", scalar(54, 1, 16, 4),
        Wglpf => "WGLPF", scalar(55, 1, 16, 4),
        IsedDet => "ISED_DET", scalar(56, 1, 16, 0),
        Irte => "IRTE", scalar(58, 1, 16, 0),
        MskCo1 => "MSK_CO1", scalar(59, 1, 16, 4),
        MskCo2 => "MSK_CO2", scalar(60, 1, 16, 4),
        MskX => "MSK_X", scalar(61, 1, 16, 4),
        Ideg => "IDEG", scalar(62, 1, 16, 0),
        Iwq => "IWQ", scalar(63, 1, 16, 0),
        Trnsrch => "TRNSRCH", scalar(65, 1, 16, 4),
        Evrch => "EVRCH", scalar(66, 1, 16, 4),
        Irtpest => "IRTPEST", scalar(67, 1, 16, 0),
        Icn => "ICN", scalar(68, 1, 16, 0),
        Cncoef => "CNCOEF", scalar(69, 1, 16, 4),
        Cdn => "CDN", scalar(70, 1, 16, 4),
        Sdnco => "SDNCO", scalar(71, 1, 16, 4),
        BactSwf => "BACT_SWF", scalar(72, 1, 16, 4),
        Bactmx => "BACTMX", scalar(73, 1, 16, 4),
        Bactminlp => "BACTMINLP", scalar(74, 1, 16, 4),
        Bactminp => "BACTMINP", scalar(75, 1, 16, 4),
        Wdlprch => "WDLPRCH", scalar(76, 1, 16, 4),
        Wdprch => "WDPRCH", scalar(77, 1, 16, 4),
        Wdlpres => "WDLPRES", scalar(78, 1, 16, 4),
        Wdpres => "WDPRES", scalar(79, 1, 16, 4),
        TbAdj => "TB_ADJ", scalar(80, 1, 16, 4),
        DepimpBsn => "DEPIMP_BSN", scalar(81, 1, 16, 0),
        DdrainBsn => "DDRAIN_BSN", scalar(82, 1, 16, 4),
        TdrainBsn => "TDRAIN_BSN", scalar(83, 1, 16, 4),
        GdrainBsn => "GDRAIN_BSN", scalar(84, 1, 16, 4),
        CnFroz => "CN_FROZ", scalar(85, 1, 16, 6),
        DormHr => "DORM_HR", scalar(86, 1, 16, 4),
        Smxco => "SMXCO", scalar(87, 1, 16, 4),
        Fixco => "FIXCO", scalar(88, 1, 16, 4),
        Nfixmx => "NFIXMX", scalar(89, 1, 16, 4),
        AnionExclBsn => "ANION_EXCL_BSN", scalar(90, 1, 16, 4),
        ChOncoBsn => "CH_ONCO_BSN", scalar(91, 1, 16, 4),
        ChOpcoBsn => "CH_OPCO_BSN", scalar(92, 1, 16, 4),
        HlifeNgwBsn => "HLIFE_NGW_BSN", scalar(93, 1, 16, 4),
        RcnSubBsn => "RCN_SUB_BSN", scalar(94, 1, 16, 4),
        Bc1Bsn => "BC1_BSN", scalar(95, 1, 16, 4),
        Bc2Bsn => "BC2_BSN", scalar(96, 1, 16, 4),
        Bc3Bsn => "BC3_BSN", scalar(97, 1, 16, 4),
        Bc4Bsn => "BC4_BSN", scalar(98, 1, 16, 4),
        DecrMin => "DECR_MIN", scalar(99, 1, 16, 4),
        Icfac => "ICFAC", scalar(100, 1, 16, 4),
        RsdCovco => "RSD_COVCO", scalar(101, 1, 16, 4),
        Vcrit => "VCRIT", scalar(102, 1, 16, 4),
        Cswat => "CSWAT", scalar(103, 1, 16, 0),
        ResStlrCo => "RES_STLR_CO", scalar(104, 1, 16, 4),
        BfloDist => "BFLO_DIST", scalar(105, 1, 16, 4),
        Iuh => "IUH", scalar(106, 1, 16, 0),
        Uhalpha => "UHALPHA", scalar(107, 1, 16, 4),
        ErosSpl => "EROS_SPL", scalar(111, 1, 16, 4),
        RillMult => "RILL_MULT", scalar(112, 1, 16, 4),
        ErosExpo => "EROS_EXPO", scalar(113, 1, 16, 4),
        SubdChsed => "SUBD_CHSED", scalar(114, 1, 16, 4),
        CFactor => "C_FACTOR", scalar(115, 1, 16, 4),
        ChD50 => "CH_D50", scalar(116, 1, 16, 2),
        SigG => "SIG_G", scalar(117, 1, 16, 4),
        ReBsn => "RE_BSN", scalar(118, 1, 16, 3),
        SdrainBsn => "SDRAIN_BSN", scalar(119, 1, 16, 3),
        DrainCoBsn => "DRAIN_CO_BSN", scalar(120, 1, 16, 3),
        PcBsn => "PC_BSN", scalar(121, 1, 16, 4),
        LatksatfBsn => "LATKSATF_BSN", scalar(122, 1, 16, 3),
        Itdrn => "ITDRN", scalar(123, 1, 16, 0),
        Iwtdn => "IWTDN", scalar(124, 1, 16, 0),
        SolPModel => "SOL_P_MODEL", scalar(125, 1, 16, 0),
        Iabstr => "IABSTR", scalar(126, 1, 16, 3),
        Iatmodep => "IATMODEP", scalar(127, 1, 16, 0),
        R2adjBsn => "R2ADJ_BSN", scalar(128, 1, 16, 0),
        SstmaxdBsn => "SSTMAXD_BSN", scalar(129, 1, 16, 0),
        Ismax => "ISMAX", scalar(130, 1, 16, 0),
        Iroutunit => "IROUTUNIT", scalar(131, 1, 16, 0),
    }
}

parameter_registry! {
    /// Groundwater parameters of `*.gw` files
    GroundwaterParameter, FileKind::Groundwater, {
        Shallst => "SHALLST", scalar(2, 1, 16, 5),
        Deepst => "DEEPST", scalar(3, 1, 16, 5),
        GwDelay => "GW_DELAY", scalar(4, 1, 16, 5),
        AlphaBf => "ALPHA_BF", scalar(5, 1, 16, 5),
        Gwqmn => "GWQMN", scalar(6, 1, 16, 5),
        GwRevap => "GW_REVAP", scalar(7, 1, 16, 5),
        Revapmn => "REVAPMN", scalar(8, 1, 16, 5),
        RchrgDp => "RCHRG_DP", scalar(9, 1, 16, 5),
        Gwht => "GWHT", scalar(10, 1, 16, 5),
        GwSpyld => "GW_SPYLD", scalar(11, 1, 16, 5),
        ShallstN => "SHALLST_N", scalar(12, 1, 16, 5),
        Gwsolp => "GWSOLP", scalar(13, 1, 16, 5),
        HlifeNgw => "HLIFE_NGW", scalar(14, 1, 16, 5),
        LatOrgn => "LAT_ORGN", scalar(15, 1, 16, 5),
        LatOrgp => "LAT_ORGP", scalar(16, 1, 16, 5),
        AlphaBfD => "ALPHA_BF_D", scalar(17, 1, 16, 5),
    }
}

parameter_registry! {
    /// Management parameters of `*.mgt` files (general section only)
    ManagementParameter, FileKind::Management, {
        Nmgt => "NMGT", scalar(2, 1, 16, 0),
        Igro => "IGRO", scalar(4, 1, 16, 0),
        PlantId => "PLANT_ID", scalar(5, 1, 16, 0),
        LaiInit => "LAI_INIT", scalar(6, 1, 16, 3),
        BioInit => "BIO_INIT", scalar(7, 1, 16, 3),
        PhuPlt => "PHU_PLT", scalar(8, 1, 16, 3),
        Biomix => "BIOMIX", scalar(10, 1, 16, 3),
        Cn2 => "CN2", scalar(11, 1, 16, 3),
        UsleP => "USLE_P", scalar(12, 1, 16, 3),
        BioMin => "BIO_MIN", scalar(13, 1, 16, 3),
        Filterw => "FILTERW", scalar(14, 1, 16, 4),
        Iurban => "IURBAN", scalar(16, 1, 16, 0),
        Urblu => "URBLU", scalar(17, 1, 16, 0),
        Irrsc => "IRRSC", scalar(19, 1, 16, 0),
        Irrno => "IRRNO", scalar(20, 1, 16, 0),
        Flowmin => "FLOWMIN", scalar(21, 1, 16, 4),
        Divmax => "DIVMAX", scalar(22, 1, 16, 4),
        Flowfr => "FLOWFR", scalar(23, 1, 16, 4),
        Ddrain => "DDRAIN", scalar(25, 1, 16, 4),
        Tdrain => "TDRAIN", scalar(26, 1, 16, 4),
        Gdrain => "GDRAIN", scalar(27, 1, 16, 4),
        Nrot => "NROT", scalar(29, 1, 16, 0),
    }
}

parameter_registry! {
    /// Subbasin parameters of `*.sub` files
    SubbasinParameter, FileKind::Subbasin, {
        SubKm => "SUB_KM", scalar(2, 1, 16, 6),
        ChL1 => "CH_L1", scalar(25, 1, 16, 6),
        ChS1 => "CH_S1", scalar(26, 1, 16, 6),
        ChW1 => "CH_W1", scalar(27, 1, 16, 6),
        ChK1 => "CH_K1", scalar(28, 1, 16, 6),
        ChN1 => "CH_N1", scalar(29, 1, 16, 6),
        Co2 => "CO2", scalar(35, 1, 16, 6),
    }
}

parameter_registry! {
    /// HRU parameters of `*.hru` files
    HruParameter, FileKind::Hru, {
        HruFr => "HRU_FR", scalar(2, 1, 16, 7),
        Slsubbsn => "SLSUBBSN", scalar(3, 1, 16, 4),
        HruSlp => "HRU_SLP", scalar(4, 1, 16, 4),
        OvN => "OV_N", scalar(5, 1, 16, 4),
        LatTtime => "LAT_TTIME", scalar(6, 1, 16, 4),
        LatSed => "LAT_SED", scalar(7, 1, 16, 4),
        Slsoil => "SLSOIL", scalar(8, 1, 16, 4),
        Canmx => "CANMX", scalar(9, 1, 16, 4),
        Esco => "ESCO", scalar(10, 1, 16, 4),
        Epco => "EPCO", scalar(11, 1, 16, 4),
        Rsdin => "RSDIN", scalar(12, 1, 16, 4),
        Erorgn => "ERORGN", scalar(13, 1, 16, 4),
        Erorgp => "ERORGP", scalar(14, 1, 16, 4),
        PotFr => "POT_FR", scalar(15, 1, 16, 4),
        FldFr => "FLD_FR", scalar(16, 1, 16, 4),
        RipFr => "RIP_FR", scalar(17, 1, 16, 4),
        PotTile => "POT_TILE", scalar(19, 1, 16, 4),
        PotVolx => "POT_VOLX", scalar(20, 1, 16, 4),
        PotVol => "POT_VOL", scalar(21, 1, 16, 4),
        PotNsed => "POT_NSED", scalar(22, 1, 16, 4),
        PotNo3l => "POT_NO3L", scalar(23, 1, 16, 4),
        DepImp => "DEP_IMP", scalar(24, 1, 16, 0),
        Evpot => "EVPOT", scalar(28, 1, 16, 2),
        DisStream => "DIS_STREAM", scalar(29, 1, 16, 2),
        Cf => "CF", scalar(30, 1, 16, 2),
        Cfh => "CFH", scalar(31, 1, 16, 2),
        Cfdec => "CFDEC", scalar(32, 1, 16, 4),
        SedCon => "SED_CON", scalar(33, 1, 16, 2),
        OrgnCon => "ORGN_CON", scalar(34, 1, 16, 2),
        OrgpCon => "ORGP_CON", scalar(35, 1, 16, 2),
        SolnCon => "SOLN_CON", scalar(36, 1, 16, 2),
        SolpCon => "SOLP_CON", scalar(37, 1, 16, 2),
        PotSolp => "POT_SOLP", scalar(38, 1, 16, 2),
        PotK => "POT_K", scalar(39, 1, 16, 2),
        NReduc => "N_REDUC", scalar(40, 1, 16, 2),
        NLag => "N_LAG", scalar(41, 1, 16, 2),
        NLn => "N_LN", scalar(42, 1, 16, 2),
        NLnco => "N_LNCO", scalar(43, 1, 16, 2),
        Surlag => "SURLAG", scalar(44, 1, 16, 2),
        R2adj => "R2ADJ", scalar(45, 1, 16, 2),
    }
}

parameter_registry! {
    /// Soil profile parameters of `*.sol` files
    SoilParameter, FileKind::Soil, {
        SolZmx => "SOL_ZMX", scalar(4, 29, 36, 2),
        AnionExcl => "ANION_EXCL", scalar(5, 51, 56, 4),
        SolCrk => "SOL_CRK", scalar(6, 33, 38, 4),
        SolZ => "SOL_Z", layered(8, 28, 39, 2),
        SolBd => "SOL_BD", layered(9, 28, 39, 4),
        SolAwc => "SOL_AWC", layered(10, 28, 39, 4),
        SolK => "SOL_K", layered(11, 28, 39, 4),
        SolCbn => "SOL_CBN", layered(12, 28, 39, 4),
        Clay => "CLAY", layered(13, 28, 39, 4),
        Silt => "SILT", layered(14, 28, 39, 4),
        Sand => "SAND", layered(15, 28, 39, 4),
        Rock => "ROCK", layered(16, 28, 39, 4),
        SolAlb => "SOL_ALB", layered(17, 28, 39, 4),
        UsleK => "USLE_K", layered(18, 28, 39, 4),
        SolEc => "SOL_EC", layered(19, 28, 39, 4),
        SolPh => "SOL_PH", layered(20, 28, 39, 4),
        SolCaco3 => "SOL_CACO3", layered(21, 28, 39, 4),
    }
}

parameter_registry! {
    /// Main channel parameters of `*.rte` files
    RoutingParameter, FileKind::Routing, {
        Chw2 => "CHW2", scalar(2, 1, 14, 4),
        Chd => "CHD", scalar(3, 1, 14, 4),
        ChS2 => "CH_S2", scalar(4, 1, 14, 6),
        ChL2 => "CH_L2", scalar(5, 1, 14, 4),
        ChN2 => "CH_N2", scalar(6, 1, 14, 6),
        ChK2 => "CH_K2", scalar(7, 1, 14, 4),
        ChCov1 => "CH_COV1", scalar(8, 1, 14, 4),
        ChCov2 => "CH_COV2", scalar(9, 1, 14, 4),
        ChWdr => "CH_WDR", scalar(10, 1, 14, 4),
        AlphaBnk => "ALPHA_BNK", scalar(11, 1, 14, 4),
        Icanal => "ICANAL", scalar(12, 1, 14, 3),
        ChOnco => "CH_ONCO", scalar(13, 1, 14, 3),
        ChOpco => "CH_OPCO", scalar(14, 1, 14, 3),
        ChSide => "CH_SIDE", scalar(15, 1, 14, 3),
        ChBnkBd => "CH_BNK_BD", scalar(16, 1, 14, 3),
        ChBedBd => "CH_BED_BD", scalar(17, 1, 14, 3),
        ChBnkKd => "CH_BNK_KD", scalar(18, 1, 14, 3),
        ChBedKd => "CH_BED_KD", scalar(19, 1, 14, 3),
        ChBnkD50 => "CH_BNK_D50", scalar(20, 1, 14, 3),
        ChBedD50 => "CH_BED_D50", scalar(21, 1, 14, 3),
        ChBnkTc => "CH_BNK_TC", scalar(22, 1, 14, 3),
        ChBedTc => "CH_BED_TC", scalar(23, 1, 14, 3),
        ChEq => "CH_EQ", scalar(25, 1, 14, 0),
    }
}

parameter_registry! {
    /// Simulation control parameters of `file.cio`
    ControlParameter, FileKind::Control, {
        Nbyr => "NBYR", scalar(8, 1, 17, 0),
        Iyr => "IYR", scalar(9, 1, 17, 0),
        Iprint => "IPRINT", scalar(59, 1, 17, 0),
        Nyskip => "NYSKIP", scalar(60, 1, 17, 0),
    }
}
