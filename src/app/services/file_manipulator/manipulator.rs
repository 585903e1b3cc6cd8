//! Generic load / edit / commit lifecycle of one input file

use super::behaviour::FileBehaviour;
use crate::app::models::{ChangeMode, HeaderLayout, HeaderMetadata};
use crate::app::services::field_accessor::{changed_value, read_value, write_value};
use crate::app::services::field_registry::resolve_names;
use crate::app::services::record_buffer::{Document, TextEncoding};
use crate::{Error, FieldParseFailure, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where manipulators find their files and how they decode them
#[derive(Debug, Clone)]
pub struct ManipulatorOptions {
    /// SWAT `TxtInOut` directory
    pub working_dir: PathBuf,
    pub encoding: TextEncoding,
}

impl ManipulatorOptions {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            encoding: TextEncoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Lifecycle state of a manipulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ManipulatorState {
    /// Freshly loaded or restored, nothing edited
    Loaded,
    /// Working text carries uncommitted edits
    Changed,
    /// Last edits written to disk
    Committed,
}

/// Editable view of one SWAT input file of the kind `P` belongs to
#[derive(Debug, Clone)]
pub struct FileManipulator<P: FileBehaviour> {
    file_name: String,
    path: PathBuf,
    document: Document,
    values: BTreeMap<P, Vec<f64>>,
    header: Option<HeaderMetadata>,
    pub(super) subbasin_area: Option<f64>,
    state: ManipulatorState,
}

impl<P: FileBehaviour> FileManipulator<P> {
    /// Load `file_name` from the working directory
    ///
    /// The kind's mandatory parameters are loaded along with `parameters`.
    ///
    /// # Errors
    /// * `Error::Io` / `Error::Decode` if the file cannot be read
    /// * `Error::FieldParse` listing every field of the load that is not a number
    /// * `Error::HeaderParse` if the header lacks the subbasin or land use token
    pub fn open(file_name: &str, parameters: &[P], options: &ManipulatorOptions) -> Result<Self> {
        let path = options.working_dir.join(file_name);
        let document = Document::load(&path, options.encoding)?;

        let mut manipulator = Self {
            file_name: file_name.to_string(),
            path,
            document,
            values: BTreeMap::new(),
            header: None,
            subbasin_area: None,
            state: ManipulatorState::Loaded,
        };

        let requested: BTreeSet<P> = P::mandatory()
            .iter()
            .chain(parameters.iter())
            .copied()
            .collect();
        manipulator.load_values(requested)?;
        manipulator.header = manipulator.parse_header()?;
        P::after_load(&mut manipulator, options)?;

        debug!(
            "Opened {} with {} parameters",
            manipulator.file_name,
            manipulator.values.len()
        );
        Ok(manipulator)
    }

    /// Like [`open`](Self::open), with parameters given by name
    pub fn open_by_names(file_name: &str, names: &[&str], options: &ManipulatorOptions) -> Result<Self> {
        let parameters = resolve_names::<P>(names)?;
        Self::open(file_name, &parameters, options)
    }

    fn load_values(&mut self, parameters: BTreeSet<P>) -> Result<()> {
        let mut values = BTreeMap::new();
        let mut failures: Vec<FieldParseFailure> = Vec::new();

        for parameter in parameters {
            match read_value(&self.document, parameter.name(), parameter.descriptor()) {
                Ok(read) => {
                    values.insert(parameter, read);
                }
                Err(Error::FieldParse {
                    failures: failed, ..
                }) => failures.extend(failed),
                Err(e) => return Err(e),
            }
        }

        if !failures.is_empty() {
            return Err(Error::FieldParse {
                kind: P::KIND.to_string(),
                file: self.file_name.clone(),
                failures,
            });
        }

        self.values = values;
        Ok(())
    }

    fn parse_header(&self) -> Result<Option<HeaderMetadata>> {
        match P::KIND.header_layout() {
            HeaderLayout::None => Ok(None),
            HeaderLayout::SubbasinAndLanduse => {
                let first = self
                    .document
                    .line(1)
                    .map_err(|_| Error::header_parse(&self.file_name, "file has no header line"))?;
                HeaderMetadata::parse(&self.file_name, &first.text).map(Some)
            }
        }
    }

    fn refresh_values(&mut self) -> Result<()> {
        let loaded: BTreeSet<P> = self.values.keys().copied().collect();
        self.load_values(loaded)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> ManipulatorState {
        self.state
    }

    /// Subbasin and land use from the header, for kinds that carry them
    pub fn header(&self) -> Option<&HeaderMetadata> {
        self.header.as_ref()
    }

    pub fn landuse(&self) -> Option<&str> {
        self.header.as_ref().map(|h| h.landuse.as_str())
    }

    pub fn subbasin(&self) -> Option<u32> {
        self.header.as_ref().map(|h| h.subbasin)
    }

    /// Cached values of a loaded parameter
    pub fn value(&self, parameter: P) -> Option<&[f64]> {
        self.values.get(&parameter).map(|v| v.as_slice())
    }

    pub fn values(&self) -> &BTreeMap<P, Vec<f64>> {
        &self.values
    }

    /// Cached values of a parameter, reading them first if not yet loaded
    pub fn ensure_loaded(&mut self, parameter: P) -> Result<&[f64]> {
        if !self.values.contains_key(&parameter) {
            let read = read_value(&self.document, parameter.name(), parameter.descriptor())?;
            debug!("Loaded {} from {} on demand", parameter.name(), self.file_name);
            self.values.insert(parameter, read);
        }
        Ok(self.value(parameter).unwrap_or(&[]))
    }

    /// Apply a change to every occurrence of a parameter
    ///
    /// Nothing is written if any occurrence fails to format.
    pub fn set_change(&mut self, parameter: P, amount: f64, mode: ChangeMode) -> Result<()> {
        let current = self.ensure_loaded(parameter)?.to_vec();
        let mut edited = self.document.clone();

        for index in 0..current.len() {
            let value = changed_value(&current, index, amount, mode, parameter.spreads_depth())?;
            write_value(&mut edited, parameter.descriptor(), index, value)?;
        }

        self.document = edited;
        self.state = ManipulatorState::Changed;
        debug!(
            "{} {} {} {} on {} occurrences",
            self.file_name,
            parameter.name(),
            mode,
            amount,
            current.len()
        );
        Ok(())
    }

    /// Apply a change to one 0-indexed occurrence of a parameter
    pub fn set_layer_change(
        &mut self,
        parameter: P,
        layer: usize,
        amount: f64,
        mode: ChangeMode,
    ) -> Result<()> {
        self.set_layer_changes(&[(parameter, layer, amount, mode)])
    }

    /// Apply several single-occurrence changes as one edit
    ///
    /// Either every change lands in the working text or none does.
    pub fn set_layer_changes(&mut self, changes: &[(P, usize, f64, ChangeMode)]) -> Result<()> {
        let mut current = BTreeMap::new();
        for (parameter, _, _, _) in changes {
            if !current.contains_key(parameter) {
                current.insert(*parameter, self.ensure_loaded(*parameter)?.to_vec());
            }
        }

        let mut edited = self.document.clone();
        for (parameter, layer, amount, mode) in changes {
            let values = current.get(parameter).map(Vec::as_slice).unwrap_or(&[]);
            let value = changed_value(values, *layer, *amount, *mode, parameter.spreads_depth())?;
            write_value(&mut edited, parameter.descriptor(), *layer, value)?;
            debug!(
                "{} {}[{}] {} {}",
                self.file_name,
                parameter.name(),
                layer,
                mode,
                amount
            );
        }

        self.document = edited;
        self.state = ManipulatorState::Changed;
        Ok(())
    }

    /// Apply a change to a parameter given by name
    pub fn set_named_change(&mut self, name: &str, amount: f64, mode: ChangeMode) -> Result<()> {
        let parameter = P::from_name(name)?;
        self.set_change(parameter, amount, mode)
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Drop uncommitted edits
    pub fn discard_changes(&mut self) {
        self.document.discard_changes();
        if self.state == ManipulatorState::Changed {
            self.state = ManipulatorState::Committed;
        }
    }

    /// Write the working text and reload the cache from it
    pub fn commit(&mut self) -> Result<()> {
        self.document.commit(&self.path)?;
        self.refresh_values()?;
        self.state = ManipulatorState::Committed;
        info!("Committed {}", self.file_name);
        Ok(())
    }

    /// Write the text as it was when opened and reload the cache from it
    pub fn restore(&mut self) -> Result<()> {
        self.document.restore(&self.path)?;
        self.refresh_values()?;
        self.state = ManipulatorState::Loaded;
        info!("Restored {}", self.file_name);
        Ok(())
    }
}
