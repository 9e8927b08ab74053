//! Interactive shell
//!
//! A blocking, single-threaded menu loop over any `BufRead` input and
//! `Write` output. Each menu action runs to completion against the store
//! and reports its outcome; validation, capacity and storage errors are
//! printed and the loop carries on. Only the Exit option (or the end of
//! input) stops the loop.
//!
//! Errors writing to the output stream itself are the only errors `run`
//! returns.
//!
//! # Examples
//!
//! ```no_run
//! use inventory_tracker::core::FileStore;
//! use inventory_tracker::shell::Shell;
//! use std::io;
//!
//! let stdin = io::stdin();
//! let mut shell = Shell::new(FileStore::new("estoque.txt"), stdin.lock(), io::stdout());
//! shell.run().expect("terminal closed");
//! ```

pub mod menu;

pub use menu::{is_affirmative, parse_price, parse_quantity, MenuOption, AFFIRMATIVE_TOKENS};

use crate::core::{ClearOutcome, FileStore, InventoryStore, DEFAULT_STORE_FILE};
use crate::types::{InventoryError, Product};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Store file path
    pub store_path: PathBuf,

    /// Wait for Enter after each action before redrawing the menu
    pub pause: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            pause: true,
        }
    }
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven shell over a product store
pub struct Shell<S, R, W> {
    store: S,
    input: R,
    output: W,
    pause: bool,
}

impl<R: BufRead, W: Write> Shell<FileStore, R, W> {
    /// Create a shell over the file store named in `config`
    pub fn from_config(config: &ShellConfig, input: R, output: W) -> Self {
        Shell::new(FileStore::new(&config.store_path), input, output).with_pause(config.pause)
    }
}

impl<S: InventoryStore, R: BufRead, W: Write> Shell<S, R, W> {
    /// Create a shell that pauses after each action
    pub fn new(store: S, input: R, output: W) -> Self {
        Shell {
            store,
            input,
            output,
            pause: true,
        }
    }

    /// Enable or disable the acknowledgment pause after each action
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "📦 === SISTEMA DE GERENCIAMENTO DE ESTOQUE === 📦\n"
        )?;

        loop {
            self.show_menu()?;
            let selection = match self.read_line()? {
                Some(line) => MenuOption::parse(&line),
                None => Some(MenuOption::Exit),
            };

            let flow = match selection {
                Some(MenuOption::Insert) => self.insert_product()?,
                Some(MenuOption::List) => self.list_products()?,
                Some(MenuOption::Clear) => self.clear_store()?,
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "\n✅ Sistema encerrado!")?;
                    Flow::Exit
                }
                None => {
                    writeln!(self.output, "\n❌ Opção inválida! Tente novamente.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit || self.acknowledge()? == Flow::Exit {
                break;
            }
        }

        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== MENU DE OPÇÕES ===")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{} - {}", option.key(), option.label())?;
        }
        write!(self.output, "\nEscolha uma opção: ")?;
        self.output.flush()
    }

    fn acknowledge(&mut self) -> io::Result<Flow> {
        if !self.pause {
            writeln!(self.output)?;
            return Ok(Flow::Continue);
        }
        write!(self.output, "\nPressione Enter para continuar...")?;
        self.output.flush()?;
        let flow = match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Exit,
        };
        writeln!(self.output)?;
        Ok(flow)
    }

    /// Insert: capacity check, then name, quantity and price, each validated
    /// before the next is asked for. Nothing is written unless all pass.
    fn insert_product(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== INSERIR PRODUTO ===")?;

        let count = self.load_or_report()?.len();
        let capacity = self.store.capacity();
        if count >= capacity {
            return self.report(&InventoryError::capacity_reached(capacity));
        }

        let Some(name) = self.prompt("Nome do produto: ")? else {
            return Ok(Flow::Exit);
        };
        if name.trim().is_empty() {
            return self.report(&InventoryError::InvalidName);
        }

        let Some(quantity) = self.prompt("Quantidade em estoque: ")? else {
            return Ok(Flow::Exit);
        };
        let quantity = match parse_quantity(&quantity) {
            Ok(quantity) => quantity,
            Err(e) => return self.report(&e),
        };

        let Some(price) = self.prompt("Preço unitário (R$): ")? else {
            return Ok(Flow::Exit);
        };
        let price = match parse_price(&price) {
            Ok(price) => price,
            Err(e) => return self.report(&e),
        };

        let product = match Product::try_new(&name, quantity, price) {
            Ok(product) => product,
            Err(e) => return self.report(&e),
        };

        match self.store.append(&product) {
            Ok(()) => writeln!(self.output, "\n✅ Produto inserido com sucesso!")?,
            Err(e) => writeln!(self.output, "\n❌ Erro ao salvar produto! {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn list_products(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== PRODUTOS CADASTRADOS ===")?;

        let products = self.load_or_report()?;
        if products.is_empty() {
            writeln!(self.output, "Nenhum produto cadastrado.")?;
            return Ok(Flow::Continue);
        }

        for product in &products {
            writeln!(self.output, "{}", product)?;
        }
        writeln!(self.output, "\nTotal de produtos: {}", products.len())?;
        Ok(Flow::Continue)
    }

    fn clear_store(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== LIMPAR ARQUIVO ===")?;

        let Some(answer) =
            self.prompt("Tem certeza que deseja limpar todos os produtos? (S/N): ")?
        else {
            return Ok(Flow::Exit);
        };

        if !is_affirmative(&answer) {
            writeln!(self.output, "❌ Operação cancelada.")?;
            return Ok(Flow::Continue);
        }

        match self.store.clear() {
            Ok(ClearOutcome::Cleared) => writeln!(self.output, "✅ Arquivo limpo com sucesso!")?,
            Ok(ClearOutcome::NothingToClear) => {
                writeln!(self.output, "ℹ️ Arquivo já está vazio ou não existe.")?
            }
            Err(e) => writeln!(self.output, "❌ Erro ao limpar arquivo: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Load every product; a read failure is reported and counts as an empty store.
    fn load_or_report(&mut self) -> io::Result<Vec<Product>> {
        match self.store.load_all() {
            Ok(products) => Ok(products),
            Err(e) => {
                writeln!(self.output, "❌ Erro ao ler arquivo: {}", e)?;
                Ok(Vec::new())
            }
        }
    }

    fn report(&mut self, error: &InventoryError) -> io::Result<Flow> {
        writeln!(self.output, "❌ {}", error)?;
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator; `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
