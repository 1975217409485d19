use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::Result;
use crate::reader::{read_directory, unpack};
use crate::types::PakRecord;
use crate::writer::pack;

pub fn pak_unpack(input: &Path, output: &Option<PathBuf>) -> Result<()> {
    let file = fs::File::open(input)?;
    let records = unpack(io::BufReader::new(file))?;

    let out_dir = match output {
        Some(p) => p.clone(),
        None => input.with_extension(""),
    };

    for record in &records {
        println!("{} ({} bytes)", record.path, record.data.len());

        let target = sanitized_path(&out_dir, &record.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &record.data)?;
    }

    println!("Unpacked {} files to {:?}", records.len(), out_dir);
    Ok(())
}

pub fn pak_list(input: &Path, json: bool) -> Result<()> {
    let file = fs::File::open(input)?;
    let entries = read_directory(io::BufReader::new(file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{} ({} bytes)", entry.path, entry.size);
        }
    }
    Ok(())
}

pub fn pak_pack(input: &Path, output: &Path) -> Result<()> {
    let mut records = Vec::new();

    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(input).unwrap_or(entry.path());
        let path = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");

        records.push(PakRecord {
            path,
            data: fs::read(entry.path())?,
        });
    }

    let mut file = fs::File::create(output)?;
    pack(&mut file, &records)?;
    println!("Packed {} files into {:?}", records.len(), output);
    Ok(())
}

/// Join an archive path under the output directory, dropping absolute and
/// parent components so an archive cannot write outside it.
fn sanitized_path(out_dir: &Path, name: &str) -> PathBuf {
    let mut target = out_dir.to_path_buf();
    for component in Path::new(name).components() {
        if let Component::Normal(part) = component {
            target.push(part);
        }
    }
    target
}
