//! Full English time zone table

use crate::timezone::TimeZone;

/// Abbreviations ordered by their 4-character search window.
///
/// Ambiguous abbreviations keep a single meaning.
pub(crate) static TIME_ZONES: &[TimeZone] = &[
    TimeZone::new("ACDT", 630),
    TimeZone::new("ACST", 570),
    TimeZone::new("ACT", -300),
    TimeZone::new("ACWST", 525),
    TimeZone::new("ADT", -180),
    TimeZone::new("AEDT", 660),
    TimeZone::new("AEST", 600),
    TimeZone::new("AET", 600),
    TimeZone::new("AFT", 270),
    TimeZone::new("AKDT", -480),
    TimeZone::new("AKST", -540),
    TimeZone::new("ALMT", 360),
    TimeZone::new("AMST", -180),
    TimeZone::new("AMT", -240),
    TimeZone::new("ANAT", 720),
    TimeZone::new("AQTT", 300),
    TimeZone::new("ART", -180),
    TimeZone::new("AST", -240),
    TimeZone::new("AWST", 480),
    TimeZone::new("AZOST", 0),
    TimeZone::new("AZOT", -60),
    TimeZone::new("AZT", 240),
    TimeZone::new("BIOT", 360),
    TimeZone::new("BIT", -720),
    TimeZone::new("BNT", 480),
    TimeZone::new("BOT", -240),
    TimeZone::new("BRST", -120),
    TimeZone::new("BRT", -180),
    TimeZone::new("BST", 60),
    TimeZone::new("BTT", 360),
    TimeZone::new("CAT", 120),
    TimeZone::new("CCT", 390),
    TimeZone::new("CDT", -300),
    TimeZone::new("CEST", 120),
    TimeZone::new("CET", 60),
    TimeZone::new("CHADT", 825),
    TimeZone::new("CHAST", 765),
    TimeZone::new("CHOST", 540),
    TimeZone::new("CHOT", 480),
    TimeZone::new("CHST", 600),
    TimeZone::new("CHUT", 600),
    TimeZone::new("CIST", -480),
    TimeZone::new("CKT", -600),
    TimeZone::new("CLST", -180),
    TimeZone::new("CLT", -240),
    TimeZone::new("COST", -240),
    TimeZone::new("COT", -300),
    TimeZone::new("CST", -360),
    TimeZone::new("CT", -360),
    TimeZone::new("CVT", -60),
    TimeZone::new("CWST", 525),
    TimeZone::new("CXT", 420),
    TimeZone::new("DAVT", 420),
    TimeZone::new("DDUT", 600),
    TimeZone::new("DFT", 60),
    TimeZone::new("EASST", -300),
    TimeZone::new("EAST", -360),
    TimeZone::new("EAT", 180),
    TimeZone::new("ECT", -240),
    TimeZone::new("EDT", -240),
    TimeZone::new("EEST", 180),
    TimeZone::new("EET", 120),
    TimeZone::new("EGST", 0),
    TimeZone::new("EGT", -60),
    TimeZone::new("EST", -300),
    TimeZone::new("ET", -300),
    TimeZone::new("FET", 180),
    TimeZone::new("FJT", 720),
    TimeZone::new("FKST", -180),
    TimeZone::new("FKT", -240),
    TimeZone::new("FNT", -120),
    TimeZone::new("GALT", -360),
    TimeZone::new("GAMT", -540),
    TimeZone::new("GET", 240),
    TimeZone::new("GFT", -180),
    TimeZone::new("GILT", 720),
    TimeZone::new("GIT", -540),
    TimeZone::new("GMT", 0),
    TimeZone::new("GST", 240),
    TimeZone::new("GYT", -240),
    TimeZone::new("HAEC", 120),
    TimeZone::new("HDT", -540),
    TimeZone::new("HKT", 480),
    TimeZone::new("HMT", 300),
    TimeZone::new("HOVST", 480),
    TimeZone::new("HOVT", 420),
    TimeZone::new("HST", -600),
    TimeZone::new("ICT", 420),
    TimeZone::new("IDLW", -720),
    TimeZone::new("IDT", 180),
    TimeZone::new("IOT", 180),
    TimeZone::new("IRDT", 270),
    TimeZone::new("IRKT", 480),
    TimeZone::new("IRST", 210),
    TimeZone::new("IST", 120),
    TimeZone::new("JST", 540),
    TimeZone::new("KALT", 120),
    TimeZone::new("KGT", 360),
    TimeZone::new("KOST", 660),
    TimeZone::new("KRAT", 420),
    TimeZone::new("KST", 540),
    TimeZone::new("LHST", 630),
    TimeZone::new("LINT", 840),
    TimeZone::new("MAGT", 720),
    TimeZone::new("MART", -570),
    TimeZone::new("MAWT", 300),
    TimeZone::new("MDT", -360),
    TimeZone::new("MEST", 120),
    TimeZone::new("MET", 60),
    TimeZone::new("MHT", 720),
    TimeZone::new("MIST", 660),
    TimeZone::new("MIT", -570),
    TimeZone::new("MMT", 390),
    TimeZone::new("MSK", 180),
    TimeZone::new("MST", -420),
    TimeZone::new("MUT", 240),
    TimeZone::new("MVT", 300),
    TimeZone::new("MYT", 480),
    TimeZone::new("NCT", 660),
    TimeZone::new("NDT", -150),
    TimeZone::new("NFT", 660),
    TimeZone::new("NOVT", 420),
    TimeZone::new("NPT", 345),
    TimeZone::new("NST", -210),
    TimeZone::new("NT", -210),
    TimeZone::new("NUT", -660),
    TimeZone::new("NZDT", 780),
    TimeZone::new("NZST", 720),
    TimeZone::new("OMST", 360),
    TimeZone::new("ORAT", 300),
    TimeZone::new("PDT", -420),
    TimeZone::new("PET", -300),
    TimeZone::new("PETT", 720),
    TimeZone::new("PGT", 600),
    TimeZone::new("PHOT", 780),
    TimeZone::new("PHST", 480),
    TimeZone::new("PHT", 480),
    TimeZone::new("PKT", 300),
    TimeZone::new("PMDT", -120),
    TimeZone::new("PMST", -180),
    TimeZone::new("PONT", 660),
    TimeZone::new("PST", -480),
    TimeZone::new("PWT", 540),
    TimeZone::new("PYST", -180),
    TimeZone::new("PYT", -240),
    TimeZone::new("RET", 240),
    TimeZone::new("ROTT", -180),
    TimeZone::new("SAKT", 660),
    TimeZone::new("SAMT", 240),
    TimeZone::new("SAST", 120),
    TimeZone::new("SBT", 660),
    TimeZone::new("SCT", 240),
    TimeZone::new("SDT", -600),
    TimeZone::new("SGT", 480),
    TimeZone::new("SLST", 330),
    TimeZone::new("SRET", 660),
    TimeZone::new("SRT", -180),
    TimeZone::new("SST", 480),
    TimeZone::new("SYOT", 180),
    TimeZone::new("TAHT", -600),
    TimeZone::new("TFT", 300),
    TimeZone::new("THA", 420),
    TimeZone::new("TJT", 300),
    TimeZone::new("TKT", 780),
    TimeZone::new("TLT", 540),
    TimeZone::new("TMT", 300),
    TimeZone::new("TOT", 780),
    TimeZone::new("TRT", 180),
    TimeZone::new("TVT", 720),
    TimeZone::new("ULAST", 540),
    TimeZone::new("ULAT", 480),
    TimeZone::new("UTC", 0),
    TimeZone::new("UYST", -120),
    TimeZone::new("UYT", -180),
    TimeZone::new("UZT", 300),
    TimeZone::new("VET", -240),
    TimeZone::new("VLAT", 600),
    TimeZone::new("VOLT", 180),
    TimeZone::new("VOST", 360),
    TimeZone::new("VUT", 660),
    TimeZone::new("WAKT", 720),
    TimeZone::new("WAST", 120),
    TimeZone::new("WAT", 60),
    TimeZone::new("WEST", 60),
    TimeZone::new("WET", 0),
    TimeZone::new("WGST", -120),
    TimeZone::new("WGT", -180),
    TimeZone::new("WIB", 420),
    TimeZone::new("WIT", 540),
    TimeZone::new("WITA", 480),
    TimeZone::new("WST", 480),
    TimeZone::new("YAKT", 540),
    TimeZone::new("YEKT", 300),
];
