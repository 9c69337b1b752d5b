use crate::domain::model::{NumberFormat, QuantityDomain, ResolutionMode, UnitHandle, UnitInfo};

/// Read-only unit catalog consumed by the resolver.
///
/// Implementations own abbreviation casing rules: whatever
/// `parse_abbreviation` accepts is an abbreviation, the resolver never
/// second-guesses it.
pub trait UnitCatalog: Send + Sync {
    /// Ordered list of every domain this catalog supports.
    fn quantity_domains(&self) -> &[QuantityDomain];

    fn units(&self, domain: QuantityDomain) -> &[UnitInfo];

    fn parse_abbreviation(&self, token: &str, domain: QuantityDomain) -> Option<UnitHandle>;

    fn convert(&self, amount: f64, from: UnitHandle, to: UnitHandle) -> Option<f64>;

    fn convert_by_abbreviation(
        &self,
        amount: f64,
        domain: QuantityDomain,
        from: &str,
        to: &str,
    ) -> Option<f64> {
        let from = self.parse_abbreviation(from, domain)?;
        let to = self.parse_abbreviation(to, domain)?;
        self.convert(amount, from, to)
    }

    fn convert_by_name(
        &self,
        amount: f64,
        domain: QuantityDomain,
        from: &str,
        to: &str,
    ) -> Option<f64> {
        let units = self.units(domain);
        let from = units.iter().find(|u| u.matches_name(from))?.handle;
        let to = units.iter().find(|u| u.matches_name(to))?.handle;
        self.convert(amount, from, to)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn resolution_mode(&self) -> ResolutionMode;
    /// Ordered allow-list; empty means every domain the catalog supports.
    fn quantity_domains(&self) -> Vec<QuantityDomain>;
    fn number_format(&self) -> NumberFormat;
    fn precision(&self) -> usize;
}
