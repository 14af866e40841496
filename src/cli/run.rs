use crate::{
    cli::{display_contact, listing_row, position_to_index},
    config, logging,
    prelude::{
        AppError, ContactBook, ContactForm, SearchQuery,
        command::{Cli, Commands},
    },
};
use clap::Parser;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    config::load_dotenv();
    logging::init_logging();

    let cli = Cli::parse();
    let config = cli.config();
    debug!(path = %config.contacts_path.display(), "Using contacts file");

    execute(&config.contact_book(), cli.command)
}

pub fn execute(book: &ContactBook, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Add {
            company,
            client,
            phone,
            email,
        } => {
            book.add_contact(ContactForm {
                company,
                client,
                phone,
                email,
            })?;

            println!("Contact added successfully!");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            let contacts = book.load()?;
            if contacts.is_empty() {
                println!("No contacts available.");
                return Ok(());
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", listing_row(i + 1, c));
            }
            Ok(())
        }

        Commands::Show { position } => {
            let contact = book.get(position_to_index(position)?)?;
            println!("{}", display_contact(&contact));
            Ok(())
        }

        // Edit contact: start from the stored record and overlay the given fields
        Commands::Update {
            position,
            company,
            client,
            phone,
            email,
        } => {
            let index = position_to_index(position)?;
            let mut form = ContactForm::from(book.get(index)?);

            if let Some(company) = company {
                form.company = company;
            }
            if let Some(client) = client {
                form.client = client;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            if let Some(email) = email {
                form.email = email;
            }

            let updated = book.update_contact(index, form)?;
            println!("Contact updated successfully!");
            println!("{}", display_contact(&updated));
            Ok(())
        }

        Commands::Delete { position } => {
            let removed = book.delete_contact(position_to_index(position)?)?;
            println!("Contact deleted successfully!");
            println!("{}", display_contact(&removed));
            Ok(())
        }

        // Search for a contact
        Commands::Search { company, client } => {
            let query = SearchQuery { company, client };
            query.validate()?;

            if book.load()?.is_empty() {
                println!("No contacts available to search.");
                return Ok(());
            }

            let results = book.search(&query)?;
            if results.is_empty() {
                println!("No contacts found.");
                return Ok(());
            }

            for (index, c) in results.iter() {
                println!("{}", listing_row(index + 1, c));
            }
            Ok(())
        }

        Commands::Companies => {
            let companies = book.distinct_companies()?;
            if companies.is_empty() {
                println!("No companies on record.");
                return Ok(());
            }

            for company in companies {
                println!("{company}");
            }
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, total) = book.import_contacts_from_csv(src.as_deref())?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = book.export_contacts_to_csv(des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
