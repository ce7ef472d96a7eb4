//! Driver domain entity

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::rules::MIN_DRIVING_AGE;
use crate::domain::values::{BirthDate, Cpf, Gender, LicenseClass, Name};
use crate::shared::errors::ValidationError;

/// A registered truck driver, identified by CPF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    cpf: Cpf,
    name: Name,
    gender: Gender,
    license: LicenseClass,
    birth_date: BirthDate,
    has_vehicle: bool,
}

impl Driver {
    /// Validates CPF, name, gender, license and birth date in that order,
    /// then requires the driver to be of driving age.
    pub fn new<Tz: TimeZone>(
        cpf: &str,
        name: &str,
        gender: &str,
        license: &str,
        birth_date: DateTime<Tz>,
        has_vehicle: bool,
    ) -> Result<Self, ValidationError> {
        Self::new_at(cpf, name, gender, license, birth_date, has_vehicle, Utc::now())
    }

    fn new_at<Tz: TimeZone>(
        cpf: &str,
        name: &str,
        gender: &str,
        license: &str,
        birth_date: DateTime<Tz>,
        has_vehicle: bool,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let cpf = Cpf::parse(cpf)?;
        let name = Name::parse(name)?;
        let gender = Gender::parse(gender)?;
        let license = LicenseClass::parse(license)?;
        let birth_date = BirthDate::new(birth_date)?;

        let age = birth_date.age_at(now);
        if age < MIN_DRIVING_AGE {
            return Err(ValidationError::InvalidAge(age));
        }

        Ok(Self {
            cpf,
            name,
            gender,
            license,
            birth_date,
            has_vehicle,
        })
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn license(&self) -> LicenseClass {
        self.license
    }

    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn has_vehicle(&self) -> bool {
        self.has_vehicle
    }

    /// Age as of the moment of the call.
    pub fn age(&self) -> u32 {
        self.birth_date.age()
    }

    pub fn set_name(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.name = Name::parse(raw)?;
        Ok(())
    }

    pub fn set_gender(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.gender = Gender::parse(raw)?;
        Ok(())
    }

    pub fn set_license(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.license = LicenseClass::parse(raw)?;
        Ok(())
    }

    pub fn set_has_vehicle(&mut self, has_vehicle: bool) {
        self.has_vehicle = has_vehicle;
    }
}

// ── Tests ──────────────────────────────────────────────────────
