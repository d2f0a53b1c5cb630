use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::Interval;
use crate::data_structs::typedef::{
    PosType,
    SeqNameStr,
};
use crate::error::LocusError;

const UNMAPPED_TOKEN: &str = "unmapped";
const INTERVAL_FILE_EXTENSIONS: [&str; 5] =
    [".bed", ".list", ".picard", ".interval_list", ".intervals"];

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9,]+)(?:(\+)|-([0-9,]+))?$").expect("Position regex is valid")
});

/// One user-supplied interval specification.
///
/// Tokens are only classified here. Reading interval files and resolving
/// contig names against a sequence dictionary belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalToken {
    /// Sentinel selecting reads without an alignment.
    Unmapped,
    /// Path to an interval file.
    File(PathBuf),
    /// `contig`, `contig:pos`, `contig:start-stop` or `contig:start+`.
    /// Missing bounds mean "from the contig start" / "to the contig end".
    Locus {
        contig: SeqNameStr,
        start:  Option<PosType>,
        stop:   Option<PosType>,
    },
}

impl IntervalToken {
    pub fn is_unmapped(token: &str) -> bool {
        token.trim().eq_ignore_ascii_case(UNMAPPED_TOKEN)
    }

    pub fn is_interval_file(token: &str) -> bool {
        let lower = token.to_lowercase();
        INTERVAL_FILE_EXTENSIONS
            .iter()
            .any(|ext| lower.ends_with(ext))
    }

    /// Resolves a locus token into an [`Interval`] given the contig's rank and
    /// length from the caller's dictionary.
    pub fn into_interval(
        self,
        contig_index: usize,
        contig_length: PosType,
    ) -> anyhow::Result<Interval> {
        let token = self.to_string();
        match self {
            IntervalToken::Locus {
                contig,
                start,
                stop,
            } => {
                let start = start.unwrap_or(1);
                let stop = stop.unwrap_or(contig_length);
                if stop > contig_length {
                    return Err(LocusError::malformed(
                        token,
                        format!(
                            "stop {} is beyond the end of contig {} ({} bp)",
                            stop, contig, contig_length
                        ),
                    )
                    .into());
                }
                Interval::try_new(contig, contig_index, start, stop)
            },
            _ => Err(LocusError::malformed(token, "token does not describe a locus").into()),
        }
    }
}

fn parse_position(
    token: &str,
    value: &str,
) -> anyhow::Result<PosType> {
    value
        .replace(',', "")
        .parse::<PosType>()
        .map_err(|e| LocusError::malformed(token, format!("bad position '{}': {}", value, e)).into())
}

impl FromStr for IntervalToken {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(';') {
            return Err(LocusError::malformed(
                s,
                "the 'interval1;interval2' syntax is not supported, pass each interval separately",
            )
            .into());
        }
        if Self::is_unmapped(s) {
            return Ok(IntervalToken::Unmapped);
        }
        if Self::is_interval_file(s) {
            return Ok(IntervalToken::File(PathBuf::from(s)));
        }

        let trimmed = s.trim();
        // Everything after the last ':' must be a position range.
        let (contig, positions) = match trimmed.rsplit_once(':') {
            Some((contig, positions)) => (contig, Some(positions)),
            None => (trimmed, None),
        };
        if contig.is_empty() {
            return Err(LocusError::malformed(s, "expected contig[:start[-stop]]").into());
        }
        let contig = SeqNameStr::from(contig);

        let (start, stop) = match positions {
            None => (None, None),
            Some(positions) => {
                let captures = POSITION_RE.captures(positions).ok_or_else(|| {
                    LocusError::malformed(s, "expected start, start-stop or start+ after ':'")
                })?;
                let start = parse_position(s, &captures[1])?;
                match (captures.get(2), captures.get(3)) {
                    (Some(_plus), _) => (Some(start), None),
                    (None, Some(stop)) => (Some(start), Some(parse_position(s, stop.as_str())?)),
                    (None, None) => (Some(start), Some(start)),
                }
            },
        };

        if start == Some(0) {
            return Err(LocusError::malformed(s, "positions are 1-based").into());
        }
        if let (Some(start), Some(stop)) = (start, stop) {
            if start > stop {
                return Err(LocusError::malformed(
                    s,
                    format!("start {} is greater than stop {}", start, stop),
                )
                .into());
            }
        }

        Ok(IntervalToken::Locus {
            contig,
            start,
            stop,
        })
    }
}

impl Display for IntervalToken {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            IntervalToken::Unmapped => write!(f, "{}", UNMAPPED_TOKEN),
            IntervalToken::File(path) => write!(f, "{}", path.display()),
            IntervalToken::Locus {
                contig,
                start: None,
                ..
            } => write!(f, "{}", contig),
            IntervalToken::Locus {
                contig,
                start: Some(start),
                stop: None,
            } => write!(f, "{}:{}+", contig, start),
            IntervalToken::Locus {
                contig,
                start: Some(start),
                stop: Some(stop),
            } => write!(f, "{}:{}-{}", contig, start, stop),
        }
    }
}
