use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::{Arm, Observation};
use crate::error::SampleError;
use crate::streams::ObservationStream;

/// `x,y,z` records behind one header line, which is skipped unread.
///
/// Fields are trimmed. Blank lines are ignored. Every other malformed line ends
/// the load with an error carrying its 1-based line number.
pub struct CsvObservationStream {
    reader: csv::Reader<Box<dyn Read>>,
    record: StringRecord,
    path: Option<PathBuf>,
    exhausted: bool,
}

impl CsvObservationStream {
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Self::build_reader(Box::new(reader)),
            record: StringRecord::new(),
            path: None,
            exhausted: false,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let mut stream = Self::from_reader(file);
        stream.path = Some(path);
        Ok(stream)
    }

    fn build_reader(source: Box<dyn Read>) -> csv::Reader<Box<dyn Read>> {
        ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source)
    }

    fn parse_record(record: &StringRecord) -> Result<Observation, SampleError> {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 3 {
            return Err(SampleError::Arity {
                line,
                found: record.len(),
            });
        }

        let float = |field: &'static str, raw: &str| {
            raw.parse::<f64>().map_err(|_| SampleError::Parse {
                line,
                field,
                value: raw.to_string(),
            })
        };
        let x = float("x", &record[0])?;
        let y = float("y", &record[1])?;

        let raw_z = &record[2];
        let z = raw_z.parse::<i64>().map_err(|_| SampleError::Parse {
            line,
            field: "z",
            value: raw_z.to_string(),
        })?;
        let arm = Arm::try_from(z).map_err(|_| SampleError::InvalidTreatment {
            line,
            value: raw_z.to_string(),
        })?;

        Ok(Observation::new(x, y, arm))
    }
}

impl ObservationStream for CsvObservationStream {
    fn has_more_observations(&self) -> bool {
        !self.exhausted
    }

    fn next_observation(&mut self) -> Option<Result<Observation, SampleError>> {
        if self.exhausted {
            return None;
        }
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Self::parse_record(&self.record)),
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                self.exhausted = true;
                Some(Err(SampleError::from(e)))
            }
        }
    }

    fn restart(&mut self) -> Result<(), SampleError> {
        let Some(path) = &self.path else {
            return Err(SampleError::Io(io::Error::new(
                ErrorKind::Unsupported,
                "stream was not opened from a file and cannot be restarted",
            )));
        };
        let file = File::open(path)?;
        self.reader = Self::build_reader(Box::new(file));
        self.exhausted = false;
        Ok(())
    }
}
