use ifn_core::errors::{ErrorInfo, IfnError};
use ifn_core::schema::SchemaVersion;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

const PAYLOAD_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes a matrix to a compact binary representation using `bincode`.
pub fn matrix_to_bytes(matrix: &DMatrix<f64>) -> Result<Vec<u8>, IfnError> {
    let payload = MatrixPayload::from_matrix(matrix);
    bincode::serialize(&payload)
        .map_err(|err| IfnError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a matrix from its binary representation.
pub fn matrix_from_bytes(bytes: &[u8]) -> Result<DMatrix<f64>, IfnError> {
    let payload: MatrixPayload = bincode::deserialize(bytes)
        .map_err(|err| IfnError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    payload.into_matrix()
}

/// Serializes a matrix to a JSON string.
pub fn matrix_to_json(matrix: &DMatrix<f64>) -> Result<String, IfnError> {
    let payload = MatrixPayload::from_matrix(matrix);
    serde_json::to_string_pretty(&payload)
        .map_err(|err| IfnError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a matrix from a JSON string.
pub fn matrix_from_json(json: &str) -> Result<DMatrix<f64>, IfnError> {
    let payload: MatrixPayload = serde_json::from_str(json)
        .map_err(|err| IfnError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    payload.into_matrix()
}

#[derive(Debug, Serialize, Deserialize)]
struct MatrixPayload {
    schema_version: SchemaVersion,
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl MatrixPayload {
    fn from_matrix(matrix: &DMatrix<f64>) -> Self {
        let (rows, cols) = matrix.shape();
        let mut values = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                values.push(matrix[(row, col)]);
            }
        }
        Self {
            schema_version: PAYLOAD_SCHEMA,
            rows,
            cols,
            values,
        }
    }

    fn into_matrix(self) -> Result<DMatrix<f64>, IfnError> {
        if self.schema_version.major != PAYLOAD_SCHEMA.major {
            let info = ErrorInfo::new("schema-version", "unsupported payload schema version")
                .with_context("payload_major", self.schema_version.major.to_string())
                .with_context("supported_major", PAYLOAD_SCHEMA.major.to_string());
            return Err(IfnError::Serde(info));
        }
        // The product can overflow on forged payloads; such a shape can
        // never match an in-memory value count.
        if self.rows.checked_mul(self.cols) != Some(self.values.len()) {
            let info = ErrorInfo::new("payload-shape", "value count does not match dimensions")
                .with_context("rows", self.rows.to_string())
                .with_context("cols", self.cols.to_string())
                .with_context("values", self.values.len().to_string());
            return Err(IfnError::Serde(info));
        }
        Ok(DMatrix::from_row_slice(self.rows, self.cols, &self.values))
    }
}
