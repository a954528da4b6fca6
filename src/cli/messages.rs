//! Player-facing strings, in English and Portuguese.

use std::string::String;

/// Display language for the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

/// Message catalog for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn hit(&self, ship_size: usize) -> String {
        match self.locale {
            Locale::En => format!("Hit! A ship of size {}.", ship_size),
            Locale::Pt => format!("Acertaste! Um navio de tamanho {}.", ship_size),
        }
    }

    pub fn miss(&self) -> &'static str {
        match self.locale {
            Locale::En => "Water.",
            Locale::Pt => "Água.",
        }
    }

    pub fn repeated(&self) -> &'static str {
        match self.locale {
            Locale::En => "Stop wasting torpedoes! You already fired at this position.",
            Locale::Pt => "Para de desperdiçar torpedos! Já disparaste nesta posição.",
        }
    }

    pub fn victory(&self) -> &'static str {
        match self.locale {
            Locale::En => "All ships have been sunk. Congratulations!",
            Locale::Pt => "Todos os navios foram afundados. Parabéns!",
        }
    }

    pub fn game_over(&self) -> &'static str {
        match self.locale {
            Locale::En => "The game is over. Start a new one to keep playing.",
            Locale::Pt => "O jogo terminou. Começa um novo para continuar.",
        }
    }

    pub fn out_of_bounds(&self, row: usize, col: usize) -> String {
        match self.locale {
            Locale::En => format!("Row {}, column {} is outside the board.", row + 1, col + 1),
            Locale::Pt => format!("Linha {}, coluna {} está fora do tabuleiro.", row + 1, col + 1),
        }
    }

    pub fn counters(&self, hits: usize, shots: usize) -> String {
        match self.locale {
            Locale::En => format!("Hits: {}   Shots fired: {}", hits, shots),
            Locale::Pt => format!("Acertos: {}   Disparos: {}", hits, shots),
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.locale {
            Locale::En => "Enter target (e.g., E4) or 'quit': ",
            Locale::Pt => "Indica o alvo (ex.: E4) ou 'quit': ",
        }
    }

    pub fn invalid_input(&self, reason: &str) -> String {
        match self.locale {
            Locale::En => format!("Invalid input: {}", reason),
            Locale::Pt => format!("Entrada inválida: {}", reason),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
