//! Label and message catalogs.
//!
//! English is the default. The Spanish catalog carries the wording of the
//! Spanish-language AdOps form.

use serde::{Deserialize, Serialize};

use crate::core::{CpmField, CtrField, Field, Guidance, MetricLabel, Mode};

/// Language used for labels, messages and form chrome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// All user-visible strings for one locale.
#[derive(Debug)]
pub struct Catalog {
    pub title: &'static str,
    pub cpm_tab: &'static str,
    pub ctr_tab: &'static str,
    pub total_cost: &'static str,
    pub cpm_rate: &'static str,
    pub impressions: &'static str,
    pub clicks: &'static str,
    pub ctr: &'static str,
    pub calculate: &'static str,
    pub reset: &'static str,
    pub need_two_cpm_values: &'static str,
    pub need_impressions_and_clicks: &'static str,
}

static EN: Catalog = Catalog {
    title: "AdOps Tools",
    cpm_tab: "CPM Calculator",
    ctr_tab: "CTR Calculator",
    total_cost: "Total Cost",
    cpm_rate: "CPM",
    impressions: "Impressions",
    clicks: "Clicks",
    ctr: "CTR",
    calculate: "Calculate",
    reset: "Reset",
    need_two_cpm_values: "Please enter at least two values to calculate.",
    need_impressions_and_clicks: "Please enter both impressions and clicks to calculate CTR.",
};

static ES: Catalog = Catalog {
    title: "AdOps Tools",
    cpm_tab: "Calculadora CPM",
    ctr_tab: "Calculadora CTR",
    total_cost: "Costo Total",
    cpm_rate: "CPM",
    impressions: "Impresiones",
    clicks: "Clicks",
    ctr: "CTR",
    calculate: "Calcular",
    reset: "Reiniciar",
    need_two_cpm_values: "Por favor, ingrese al menos dos valores para calcular.",
    need_impressions_and_clicks:
        "Por favor, ingrese tanto impresiones como clicks para calcular CTR.",
};

impl Locale {
    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }

    /// Label printed in front of a computed value
    pub fn label(&self, label: MetricLabel) -> &'static str {
        let catalog = self.catalog();
        match label {
            MetricLabel::Cpm => catalog.cpm_rate,
            MetricLabel::TotalCost => catalog.total_cost,
            MetricLabel::Impressions => catalog.impressions,
            MetricLabel::Ctr => catalog.ctr,
        }
    }

    pub fn guidance(&self, guidance: Guidance) -> &'static str {
        let catalog = self.catalog();
        match guidance {
            Guidance::NeedTwoCpmValues => catalog.need_two_cpm_values,
            Guidance::NeedImpressionsAndClicks => catalog.need_impressions_and_clicks,
        }
    }

    /// Placeholder shown for an input field
    pub fn field_name(&self, field: Field) -> &'static str {
        let catalog = self.catalog();
        match field {
            Field::Cpm(CpmField::TotalCost) => catalog.total_cost,
            Field::Cpm(CpmField::CpmRate) => catalog.cpm_rate,
            Field::Cpm(CpmField::Impressions) | Field::Ctr(CtrField::Impressions) => {
                catalog.impressions
            }
            Field::Ctr(CtrField::Clicks) => catalog.clicks,
        }
    }

    pub fn mode_tab(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Cpm => self.catalog().cpm_tab,
            Mode::Ctr => self.catalog().ctr_tab,
        }
    }
}
