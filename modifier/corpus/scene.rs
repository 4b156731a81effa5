use std::{fs, path::Path};

use regex::Regex;

use crate::corpus::CorpusError;
use crate::module::{Extent, GeometryCorpus, ScenePair};

/// Loads a scene-vector file into a [`GeometryCorpus`].
///
/// One referent per line:
///
/// ```text
/// face 3 referent:5x13 distractor:4x9
/// ```
///
/// Dimensions are `<width>x<height>`. Blank lines and lines starting
/// with `#` are skipped. Missing cells, malformed cells and non-positive
/// dimensions are fatal configuration errors.
pub fn load_scenes(path: impl AsRef<Path>) -> Result<GeometryCorpus, CorpusError> {
    let content = fs::read_to_string(&path)?;
    let cell_re = Regex::new(r"^(referent|distractor):(\d+(?:\.\d+)?)x(\d+(?:\.\d+)?)$")
        .unwrap_or_else(|_| unreachable!("static pattern"));

    let mut corpus = GeometryCorpus::default();
    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(supertype), Some(subtype)) = (fields.next(), fields.next()) else {
            return Err(CorpusError::MalformedCell {
                line: line_no,
                cell: line.to_string(),
            });
        };

        let mut referent = None;
        let mut distractor = None;
        for cell in fields {
            let captures = cell_re
                .captures(cell)
                .ok_or_else(|| CorpusError::MalformedCell {
                    line: line_no,
                    cell: cell.to_string(),
                })?;
            let extent = parse_extent(&captures, line_no)?;
            match &captures[1] {
                "referent" => referent = Some(extent),
                _ => distractor = Some(extent),
            }
        }
        let referent = referent.ok_or(CorpusError::MissingCell {
            line: line_no,
            cell: "referent",
        })?;
        let distractor = distractor.ok_or(CorpusError::MissingCell {
            line: line_no,
            cell: "distractor",
        })?;
        corpus.insert(supertype, subtype, ScenePair { referent, distractor });
    }

    if corpus.is_empty() {
        return Err(CorpusError::EmptyCorpus {
            path: path.as_ref().display().to_string(),
        });
    }
    Ok(corpus)
}

fn parse_extent(captures: &regex::Captures<'_>, line: usize) -> Result<Extent, CorpusError> {
    let width: f64 = captures[2]
        .parse()
        .map_err(|_| CorpusError::MalformedCell {
            line,
            cell: captures[0].to_string(),
        })?;
    let height: f64 = captures[3]
        .parse()
        .map_err(|_| CorpusError::MalformedCell {
            line,
            cell: captures[0].to_string(),
        })?;
    if width <= 0.0 || height <= 0.0 {
        return Err(CorpusError::NonPositiveDimension { line });
    }
    Ok(Extent::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_scene(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_referent_and_distractor_cells() {
        let file = write_scene(
            "# visual scenes\n\
             face 3 referent:5x13 distractor:4x9\n\
             books h++w++ distractor:12x4 referent:25x5\n",
        );
        let corpus = load_scenes(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        let scene = corpus.get("face", "3").unwrap();
        assert_eq!(scene.referent, Extent::new(5.0, 13.0));
        assert_eq!(scene.distractor, Extent::new(4.0, 9.0));
        let scene = corpus.get("books", "h++w++").unwrap();
        assert_eq!(scene.referent.width, 25.0);
        assert_eq!(scene.distractor.height, 4.0);
    }

    #[test]
    fn missing_distractor_cell_is_fatal() {
        let file = write_scene("face 3 referent:5x13\n");
        let err = load_scenes(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MissingCell { line: 1, cell: "distractor" }
        ));
    }

    #[test]
    fn zero_dimension_is_fatal() {
        let file = write_scene("face 3 referent:0x13 distractor:4x9\n");
        let err = load_scenes(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::NonPositiveDimension { line: 1 }));
    }

    #[test]
    fn malformed_cell_is_fatal() {
        let file = write_scene("face 3 referent:fivex13 distractor:4x9\n");
        let err = load_scenes(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::MalformedCell { line: 1, .. }));
    }

    #[test]
    fn file_without_referents_is_fatal() {
        let file = write_scene("# nothing here\n\n");
        let err = load_scenes(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyCorpus { .. }));
    }
}
