use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCategory {
    Technical,
    Impact,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    // Technical
    NoReadData,
    ReferenceError,
    // Mapping errors
    MappingError,
    SelfChain,
    StrOrLowComplexity,
    LowUmapM50,
    // Dubious read alignment
    DubiousReadAlignment,
    MismappedRead,
    ComplexEvent,
    Stutter,
    RepetitiveSequence,
    DubiousOther,
    // Genotyping errors
    GenotypingError,
    LowGenotypeQuality,
    LowReadDepth,
    AlleleBalance,
    GcRich,
    HomopolymerOrStr,
    StrandBias,
    // Impact
    // Inconsequential transcript
    InconsequentialTranscript,
    MultipleAnnotations,
    PextLessThanHalfMax,
    UninformativePext,
    MinorityOfTranscripts,
    MinorProteinIsoform,
    WeakExonConservation,
    UntranslatedTranscript,
    // Rescue
    Rescue,
    Mnp,
    FrameRestoringIndel,
    First150Bp,
    InFrameSai,
    MethionineRescue,
    EscapesNmd,
    LowTruncated,
    // Comment
    ComplexSplicing,
    ComplexOther,
    SecondOpinionRequired,
    FlowChartOverridden,
    SangerConfirmationRecommended,
}

pub const FLAG_COUNT: usize = 40;

/// Declaration order of the built-in catalogue. This is the column order for
/// CSV exports and the display order everywhere flags are listed.
pub fn flag_order() -> &'static [Flag] {
    &[
        Flag::NoReadData,
        Flag::ReferenceError,
        Flag::MappingError,
        Flag::SelfChain,
        Flag::StrOrLowComplexity,
        Flag::LowUmapM50,
        Flag::DubiousReadAlignment,
        Flag::MismappedRead,
        Flag::ComplexEvent,
        Flag::Stutter,
        Flag::RepetitiveSequence,
        Flag::DubiousOther,
        Flag::GenotypingError,
        Flag::LowGenotypeQuality,
        Flag::LowReadDepth,
        Flag::AlleleBalance,
        Flag::GcRich,
        Flag::HomopolymerOrStr,
        Flag::StrandBias,
        Flag::InconsequentialTranscript,
        Flag::MultipleAnnotations,
        Flag::PextLessThanHalfMax,
        Flag::UninformativePext,
        Flag::MinorityOfTranscripts,
        Flag::MinorProteinIsoform,
        Flag::WeakExonConservation,
        Flag::UntranslatedTranscript,
        Flag::Rescue,
        Flag::Mnp,
        Flag::FrameRestoringIndel,
        Flag::First150Bp,
        Flag::InFrameSai,
        Flag::MethionineRescue,
        Flag::EscapesNmd,
        Flag::LowTruncated,
        Flag::ComplexSplicing,
        Flag::ComplexOther,
        Flag::SecondOpinionRequired,
        Flag::FlowChartOverridden,
        Flag::SangerConfirmationRecommended,
    ]
}

impl Flag {
    pub fn name(self) -> &'static str {
        match self {
            Flag::NoReadData => "flag_no_read_data",
            Flag::ReferenceError => "flag_reference_error",
            Flag::MappingError => "flag_mapping_error",
            Flag::SelfChain => "flag_self_chain",
            Flag::StrOrLowComplexity => "flag_str_or_low_complexity",
            Flag::LowUmapM50 => "flag_low_umap_m50",
            Flag::DubiousReadAlignment => "flag_dubious_read_alignment",
            Flag::MismappedRead => "flag_mismapped_read",
            Flag::ComplexEvent => "flag_complex_event",
            Flag::Stutter => "flag_stutter",
            Flag::RepetitiveSequence => "flag_repetitive_sequence",
            Flag::DubiousOther => "flag_dubious_other",
            Flag::GenotypingError => "flag_genotyping_error",
            Flag::LowGenotypeQuality => "flag_low_genotype_quality",
            Flag::LowReadDepth => "flag_low_read_depth",
            Flag::AlleleBalance => "flag_allele_balance",
            Flag::GcRich => "flag_gc_rich",
            Flag::HomopolymerOrStr => "flag_homopolymer_or_str",
            Flag::StrandBias => "flag_strand_bias",
            Flag::InconsequentialTranscript => "flag_inconsequential_transcript",
            Flag::MultipleAnnotations => "flag_multiple_annotations",
            Flag::PextLessThanHalfMax => "flag_pext_less_than_half_max",
            Flag::UninformativePext => "flag_uninformative_pext",
            Flag::MinorityOfTranscripts => "flag_minority_of_transcripts",
            Flag::MinorProteinIsoform => "flag_minor_protein_isoform",
            Flag::WeakExonConservation => "flag_weak_exon_conservation",
            Flag::UntranslatedTranscript => "flag_untranslated_transcript",
            Flag::Rescue => "flag_rescue",
            Flag::Mnp => "flag_mnp",
            Flag::FrameRestoringIndel => "flag_frame_restoring_indel",
            Flag::First150Bp => "flag_first_150_bp",
            Flag::InFrameSai => "flag_in_frame_sai",
            Flag::MethionineRescue => "flag_methionine_rescue",
            Flag::EscapesNmd => "flag_escapes_nmd",
            Flag::LowTruncated => "flag_low_truncated",
            Flag::ComplexSplicing => "flag_complex_splicing",
            Flag::ComplexOther => "flag_complex_other",
            Flag::SecondOpinionRequired => "flag_second_opinion_required",
            Flag::FlowChartOverridden => "flag_flow_chart_overridden",
            Flag::SangerConfirmationRecommended => "flag_sanger_confirmation_recommended",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Flag::NoReadData => "No read data",
            Flag::ReferenceError => "Reference error",
            Flag::MappingError => "Mapping Error",
            Flag::SelfChain => "Self chain > 5",
            Flag::StrOrLowComplexity => "STR/Low complexity",
            Flag::LowUmapM50 => "Umap M50 < 0.5",
            Flag::DubiousReadAlignment => "Dubious Read Alignment",
            Flag::MismappedRead => "Mis-mapped read",
            Flag::ComplexEvent => "Complex Event",
            Flag::Stutter => "Stutter",
            Flag::RepetitiveSequence => "Repetitive sequence",
            Flag::DubiousOther => "Other",
            Flag::GenotypingError => "Genotyping Error",
            Flag::LowGenotypeQuality => "Genotype quality < 30",
            Flag::LowReadDepth => "Read depth < 15",
            Flag::AlleleBalance => "Allele balance het. < 0.25, hom. < 0.8",
            Flag::GcRich => "GC rich +/- 50 bp",
            Flag::HomopolymerOrStr => "Homopolymer/STR > 5",
            Flag::StrandBias => "Strand bias",
            Flag::InconsequentialTranscript => "Inconsequential Transcript",
            Flag::MultipleAnnotations => "Multiple annotations",
            Flag::PextLessThanHalfMax => "pext < 50% max",
            Flag::UninformativePext => "Uninformative pext",
            Flag::MinorityOfTranscripts => "Minority of transcripts <= 50%",
            Flag::MinorProteinIsoform => "Minor protein isoform (MANE/APPRIS)",
            Flag::WeakExonConservation => "Weak exon conservation",
            Flag::UntranslatedTranscript => "Untranslated transcript",
            Flag::Rescue => "Rescue",
            Flag::Mnp => "In-phase MNV",
            Flag::FrameRestoringIndel => "Frame-restoring indel",
            Flag::First150Bp => "First 150 bp",
            Flag::InFrameSai => "In-frame SAI >= 0.2",
            Flag::MethionineRescue => "Methionine rescue",
            Flag::EscapesNmd => "Escapes NMD",
            Flag::LowTruncated => "< 25% truncated",
            Flag::ComplexSplicing => "Complex splicing",
            Flag::ComplexOther => "Complex other",
            Flag::SecondOpinionRequired => "Second opinion required",
            Flag::FlowChartOverridden => "Flow chart overridden",
            Flag::SangerConfirmationRecommended => "Sanger confirmation recommended",
        }
    }

    /// Keyboard shortcut in the curation UI. Group flags whose value follows
    /// from their children have none.
    pub fn shortcut(self) -> Option<&'static str> {
        match self {
            Flag::NoReadData => Some("NR"),
            Flag::ReferenceError => Some("RE"),
            Flag::MappingError => None,
            Flag::SelfChain => Some("C5"),
            Flag::StrOrLowComplexity => Some("LC"),
            Flag::LowUmapM50 => Some("M5"),
            Flag::DubiousReadAlignment => None,
            Flag::MismappedRead => Some("MM"),
            Flag::ComplexEvent => Some("CE"),
            Flag::Stutter => Some("FS"),
            Flag::RepetitiveSequence => Some("RS"),
            Flag::DubiousOther => Some("DO"),
            Flag::GenotypingError => None,
            Flag::LowGenotypeQuality => Some("GQ"),
            Flag::LowReadDepth => Some("RD"),
            Flag::AlleleBalance => Some("BA"),
            Flag::GcRich => Some("GC"),
            Flag::HomopolymerOrStr => Some("HO"),
            Flag::StrandBias => Some("BI"),
            Flag::InconsequentialTranscript => None,
            Flag::MultipleAnnotations => Some("MA"),
            Flag::PextLessThanHalfMax => Some("P5"),
            Flag::UninformativePext => Some("UP"),
            Flag::MinorityOfTranscripts => Some("MI"),
            Flag::MinorProteinIsoform => Some("MP"),
            Flag::WeakExonConservation => Some("WE"),
            Flag::UntranslatedTranscript => Some("UT"),
            Flag::Rescue => None,
            Flag::Mnp => Some("IN"),
            Flag::FrameRestoringIndel => Some("FR"),
            Flag::First150Bp => Some("F1"),
            Flag::InFrameSai => Some("IF"),
            Flag::MethionineRescue => Some("MR"),
            Flag::EscapesNmd => Some("EN"),
            Flag::LowTruncated => Some("TR"),
            Flag::ComplexSplicing => Some("CS"),
            Flag::ComplexOther => Some("CO"),
            Flag::SecondOpinionRequired => Some("OR"),
            Flag::FlowChartOverridden => Some("FO"),
            Flag::SangerConfirmationRecommended => Some("CR"),
        }
    }

    pub fn category(self) -> FlagCategory {
        match self {
            Flag::NoReadData
            | Flag::ReferenceError
            | Flag::MappingError
            | Flag::SelfChain
            | Flag::StrOrLowComplexity
            | Flag::LowUmapM50
            | Flag::DubiousReadAlignment
            | Flag::MismappedRead
            | Flag::ComplexEvent
            | Flag::Stutter
            | Flag::RepetitiveSequence
            | Flag::DubiousOther
            | Flag::GenotypingError
            | Flag::LowGenotypeQuality
            | Flag::LowReadDepth
            | Flag::AlleleBalance
            | Flag::GcRich
            | Flag::HomopolymerOrStr
            | Flag::StrandBias => FlagCategory::Technical,
            Flag::InconsequentialTranscript
            | Flag::MultipleAnnotations
            | Flag::PextLessThanHalfMax
            | Flag::UninformativePext
            | Flag::MinorityOfTranscripts
            | Flag::MinorProteinIsoform
            | Flag::WeakExonConservation
            | Flag::UntranslatedTranscript
            | Flag::Rescue
            | Flag::Mnp
            | Flag::FrameRestoringIndel
            | Flag::First150Bp
            | Flag::InFrameSai
            | Flag::MethionineRescue
            | Flag::EscapesNmd
            | Flag::LowTruncated => FlagCategory::Impact,
            Flag::ComplexSplicing
            | Flag::ComplexOther
            | Flag::SecondOpinionRequired
            | Flag::FlowChartOverridden
            | Flag::SangerConfirmationRecommended => FlagCategory::Comment,
        }
    }

    pub fn from_name(name: &str) -> Option<Flag> {
        flag_order().iter().copied().find(|f| f.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Boolean state over the full built-in catalogue. All flags default to
/// unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagState {
    values: [bool; FLAG_COUNT],
}

impl FlagState {
    pub fn new() -> Self {
        FlagState {
            values: [false; FLAG_COUNT],
        }
    }

    pub fn get(&self, flag: Flag) -> bool {
        self.values[flag.index()]
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        self.values[flag.index()] = value;
    }

    pub fn any_checked(&self) -> bool {
        self.values.iter().any(|v| *v)
    }

    pub fn checked(&self) -> impl Iterator<Item = Flag> + '_ {
        flag_order().iter().copied().filter(|f| self.get(*f))
    }
}

impl Default for FlagState {
    fn default() -> Self {
        FlagState::new()
    }
}

impl Serialize for FlagState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FLAG_COUNT))?;
        for flag in flag_order() {
            map.serialize_entry(flag.name(), &self.get(*flag))?;
        }
        map.end()
    }
}

struct FlagStateVisitor;

impl<'de> Visitor<'de> for FlagStateVisitor {
    type Value = FlagState;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of flag names to booleans")
    }

    fn visit_map<A>(self, mut map: A) -> Result<FlagState, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut state = FlagState::new();
        while let Some(key) = map.next_key::<String>()? {
            let flag = Flag::from_name(&key)
                .ok_or_else(|| de::Error::custom(format!("unknown flag: {key}")))?;
            state.set(flag, map.next_value::<bool>()?);
        }
        Ok(state)
    }
}

impl<'de> Deserialize<'de> for FlagState {
    fn deserialize<D>(deserializer: D) -> Result<FlagState, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FlagStateVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/flags.rs"]
mod tests;
