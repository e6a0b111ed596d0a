use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum BathType {
    /// Banho Simples
    Simple,
    /// Banho Terapêutico
    Therapeutic,
    /// Banho e Tosa
    Grooming,
}

impl BathType {
    pub fn label(&self) -> &'static str {
        match self {
            BathType::Simple => "Banho Simples",
            BathType::Therapeutic => "Banho Terapêutico",
            BathType::Grooming => "Banho e Tosa",
        }
    }

    pub fn base_price_cents(&self) -> i64 {
        match self {
            BathType::Simple => 3000,
            BathType::Therapeutic => 4500,
            BathType::Grooming => 6000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum PetSize {
    #[value(alias = "pequeno")]
    Small,
    #[value(alias = "medio")]
    Medium,
    #[value(alias = "grande")]
    Large,
}

impl PetSize {
    /// Multiplier applied to the bath price, in percent.
    pub fn multiplier_pct(&self) -> i64 {
        match self {
            PetSize::Small => 100,
            PetSize::Medium => 125,
            PetSize::Large => 150,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Extras {
    pub hydration: bool,
    pub nail_trimming: bool,
    pub ear_cleaning: bool,
}

impl Extras {
    pub fn price_cents(&self) -> i64 {
        let mut total = 0;
        if self.hydration {
            total += 2000;
        }
        if self.nail_trimming {
            total += 1000;
        }
        if self.ear_cleaning {
            total += 1500;
        }
        total
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.hydration {
            parts.push("hidratação");
        }
        if self.nail_trimming {
            parts.push("unhas");
        }
        if self.ear_cleaning {
            parts.push("ouvidos");
        }
        parts.join(", ")
    }
}
