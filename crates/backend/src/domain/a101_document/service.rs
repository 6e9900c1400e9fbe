use super::repository::DocumentStore;
use thiserror::Error;

/// Reasons an uploaded file is not ingested; all are client errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("Formato de archivo no soportado. Por favor, sube un archivo de texto.")]
    UnsupportedFormat,

    #[error("El archivo está vacío o no contiene texto.")]
    EmptyText,
}

/// Split text into trimmed, non-empty paragraphs separated by blank lines
pub fn split_into_chunks(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Store the chunks of an uploaded text file, replacing an earlier upload
/// of the same name. Returns the number of chunks stored.
pub fn ingest_document(
    store: &DocumentStore,
    filename: &str,
    bytes: &[u8],
) -> Result<usize, IngestError> {
    let text = std::str::from_utf8(bytes).map_err(|_| IngestError::UnsupportedFormat)?;
    tracing::debug!("'{}': {} characters of text", filename, text.chars().count());

    if text.trim().is_empty() {
        return Err(IngestError::EmptyText);
    }

    // non-blank text always yields at least one chunk
    let chunks = split_into_chunks(text);
    let added = store.replace_document(filename, chunks);
    tracing::info!(
        "'{}': {} chunks stored, {} chunks in store",
        filename,
        added,
        store.len()
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_into_chunks() {
        let chunks = split_into_chunks("  Primero\nsigue\n\n\n\nSegundo  \r\n\r\nTercero\n\n   \n\n");
        assert_eq!(chunks, vec!["Primero\nsigue", "Segundo", "Tercero"]);
    }

    #[test]
    fn test_ingest_stores_chunks() {
        let store = DocumentStore::new();
        let added = ingest_document(&store, "notas.txt", "uno\n\ndos".as_bytes()).unwrap();
        assert_eq!(added, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ingest_rejects_binary() {
        let store = DocumentStore::new();
        let pdf_like = [0x25, 0x50, 0x44, 0x46, 0xff, 0xfe, 0x00];
        assert_eq!(
            ingest_document(&store, "doc.pdf", &pdf_like),
            Err(IngestError::UnsupportedFormat)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_ingest_rejects_blank_text() {
        let store = DocumentStore::new();
        assert_eq!(
            ingest_document(&store, "vacio.txt", b"  \n\n \t"),
            Err(IngestError::EmptyText)
        );
    }
}
