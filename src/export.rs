use crate::domain::EntitySet;
use crate::proximity::DistancePair;
use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const ENTITY_HEADER: &str = "index,name,phone_number,entity_type,formatted_address,lat,lon";

/// Dumps one search's results to `localsearch_{query}_{timestamp}.csv` in
/// the export directory and returns the path written.
pub fn write_entity_set(directory: &Path, query: &str, set: &EntitySet) -> io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y_%m_%d-%H_%M_%S");
    let path = directory.join(format!("localsearch_{query}_{timestamp}.csv"));

    let mut writer = BufWriter::new(File::create(&path)?);
    writeln!(writer, "{ENTITY_HEADER}")?;
    write_entity_rows(&mut writer, set)?;
    writer.flush()?;

    Ok(path)
}

/// Writes the given sets to one table, in fetch order, identifier first.
pub fn write_combined_entities(path: &Path, sets: &[&EntitySet]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{ENTITY_HEADER}")?;
    for set in sets {
        write_entity_rows(&mut writer, set)?;
    }
    writer.flush()
}

fn write_entity_rows(writer: &mut impl Write, set: &EntitySet) -> io::Result<()> {
    for entity in set.iter() {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            escape_csv(entity.identifier()),
            escape_csv(entity.name()),
            escape_csv(entity.phone_number().unwrap_or_default()),
            escape_csv(entity.entity_type()),
            escape_csv(entity.formatted_address()),
            entity.coordinates().latitude(),
            entity.coordinates().longitude(),
        )?;
    }
    Ok(())
}

/// Writes the ranked pairs closest first, with the rank as a visible index
/// column starting at 0.
pub fn write_distances(path: &Path, pairs: &[DistancePair]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "index,entity1,entity2,distance")?;
    for (rank, pair) in pairs.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{},{}",
            rank,
            escape_csv(&pair.entity1),
            escape_csv(&pair.entity2),
            pair.distance,
        )?;
    }
    writer.flush()
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
