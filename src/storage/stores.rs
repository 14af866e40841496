use super::*;

use csv::{Reader, WriterBuilder};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

pub const JSON_STORAGE_PATH: &str = "./contacts.json";
pub const CSV_PATH: &str = "./contacts.csv";
const CSV_HEADER: [&str; 4] = ["company", "client", "phone", "email"];

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.as_ref().to_path_buf(),
        }
    }
}

pub struct CsvStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn for_import(src: Option<&str>) -> Result<Self, AppError> {
        let file_path = PathBuf::from(src.unwrap_or(CSV_PATH));

        if !file_path.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        if !is_csv(&file_path) {
            return Err(AppError::Validation("File not .csv".to_string()));
        }

        Ok(Self::at(file_path))
    }

    pub fn for_export(des: Option<&str>) -> Result<Self, AppError> {
        let mut file_path = PathBuf::from(des.unwrap_or(CSV_PATH));

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if !is_csv(&file_path) {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }

        Ok(Self::at(file_path))
    }

    fn at(path: PathBuf) -> Self {
        Self {
            medium: "csv".to_string(),
            path,
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "csv")
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut data = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
        contacts.serialize(&mut serializer)?;
        data.push(b'\n');

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

impl ContactStore for CsvStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut reader = Reader::from_path(&self.path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Header is written by hand so an empty export is still importable
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(CSV_HEADER)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
