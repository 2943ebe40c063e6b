//! Interactive text menu for poking the API and the database by hand.

use std::io::{self, BufRead, Write};

use product_core::{Category, Decimal, Notice, Operation, PriceFormat, ProductApi, ProductInput, Transport};

use crate::database::DatabaseProbe;

const MENU: &str = "\nMenu:\n1. Test database connection\n2. Insert new product via API\n3. List products via API\n4. Exit\nChoose an option: ";

pub struct SmokeTest<'a, T, D> {
    api: &'a ProductApi<T>,
    database: &'a D,
    price_format: PriceFormat,
}

impl<'a, T: Transport, D: DatabaseProbe> SmokeTest<'a, T, D> {
    pub fn new(api: &'a ProductApi<T>, database: &'a D, price_format: PriceFormat) -> Self {
        Self {
            api,
            database,
            price_format,
        }
    }

    /// Loop until the user picks "Exit" or input ends.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            let Some(choice) = prompt(&mut input, &mut output, MENU)? else {
                writeln!(output)?;
                break;
            };
            match choice.as_str() {
                "1" => self.test_database(&mut output)?,
                "2" => self.insert_product(&mut input, &mut output)?,
                "3" => self.list_products(&mut output)?,
                "4" => break,
                _ => writeln!(output, "Invalid option. Try again.")?,
            }
        }
        writeln!(output, "Exiting...")
    }

    fn test_database<W: Write>(&self, output: &mut W) -> io::Result<()> {
        match self.database.server_time() {
            Ok(now) => {
                writeln!(output, "Database connection successful!")?;
                writeln!(output, "Current time on the PostgreSQL server: {now}")
            }
            Err(e) => {
                tracing::warn!(error = %e, "database check failed");
                writeln!(output, "Database error: {e}")
            }
        }
    }

    fn insert_product<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<()> {
        let Some(title) = prompt(input, output, "Enter the product title: ")? else {
            return Ok(());
        };
        let Some(raw_price) = prompt(input, output, "Enter the product price: ")? else {
            return Ok(());
        };
        let Ok(price) = raw_price.replace(',', ".").parse::<Decimal>() else {
            return writeln!(output, "Invalid price: '{raw_price}'.");
        };
        let Some(available) = prompt(input, output, "Is the product available? (y/n): ")? else {
            return Ok(());
        };

        let product = ProductInput {
            title,
            description: String::new(),
            price,
            available: matches!(available.to_lowercase().as_str(), "y" | "s"),
            category: Category::Other,
        };
        let notice = match self.api.create(&product) {
            Ok(()) => Notice::created(&product.title),
            Err(e) => Notice::from_error(Operation::Create, &e),
        };
        writeln!(output, "{}", notice.message)
    }

    fn list_products<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let products = match self.api.list() {
            Ok(products) if products.is_empty() => {
                return writeln!(output, "{}", Notice::empty_list().message)
            }
            Ok(products) => products,
            Err(e) => return writeln!(output, "{}", Notice::from_error(Operation::List, &e).message),
        };
        writeln!(output, "Registered products:")?;
        for product in &products {
            writeln!(
                output,
                "ID: {}, Title: {}, Price: {}, Available: {}",
                product.id,
                product.title,
                self.price_format.format(product.price),
                if product.available { "Yes" } else { "No" }
            )?;
        }
        Ok(())
    }
}

/// Print `question` and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
