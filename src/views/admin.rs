use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use super::notice::{self, Notice};
use crate::api::SharedService;
use crate::error::{Error, Result, ValidationError};
use crate::models::{CreateDrink, Drink, DrinkId, Settings};
use crate::stats::Dashboard;

/// The drink editor as typed in; price stays text until it is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkForm {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl DrinkForm {
    pub fn from_drink(drink: &Drink) -> Self {
        DrinkForm {
            name: drink.name.clone(),
            price: drink.price.to_string(),
            description: drink.description.clone(),
        }
    }

    pub fn parse(&self) -> Result<CreateDrink, ValidationError> {
        let price: f64 = self
            .price
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;

        let drink = CreateDrink {
            name: self.name.trim().to_string(),
            price,
            description: self.description.trim().to_string(),
        };
        drink.validate()?;

        Ok(drink)
    }
}

/// Catalog management and the statistics dashboard, behind a password.
pub struct AdminView {
    service: SharedService,
    authenticated: bool,
    login_failed: bool,
    drinks: Vec<Drink>,
    dashboard: Dashboard,
    settings: Settings,
    form: DrinkForm,
    editing: Option<DrinkId>,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl AdminView {
    pub fn new(service: SharedService, notice_ttl: Duration) -> Self {
        AdminView {
            service,
            authenticated: false,
            login_failed: false,
            drinks: Vec::new(),
            dashboard: Dashboard::default(),
            settings: Settings::default(),
            form: DrinkForm::default(),
            editing: None,
            notice: None,
            notice_ttl,
        }
    }

    /// Checks the password with the service and loads the screen on success.
    /// A blank password fails without asking.
    pub fn login(&mut self, password: &str) -> bool {
        if password.is_empty() {
            self.login_failed = true;
            return false;
        }

        match self.service.verify_admin(password) {
            Ok(true) => {
                self.authenticated = true;
                self.login_failed = false;
                self.load();
            }
            Ok(false) => self.login_failed = true,
            Err(e) => {
                error!(error = %e, "login error");
                self.login_failed = true;
            }
        }

        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.drinks.clear();
        self.dashboard = Dashboard::default();
        self.cancel_edit();
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login_failed(&self) -> bool {
        self.login_failed
    }

    fn ensure_authenticated(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(Error::NotAuthenticated)
        }
    }

    /// Re-fetches drinks, statistics and settings. Failures are logged and
    /// the previous copy is kept.
    pub fn refresh(&mut self) -> Result<()> {
        self.ensure_authenticated()?;
        self.load();
        Ok(())
    }

    fn load(&mut self) {
        self.refresh_drinks();
        self.refresh_statistics();

        match self.service.settings() {
            Ok(settings) => self.settings = settings,
            Err(e) => error!(error = %e, "error fetching settings"),
        }
    }

    fn refresh_drinks(&mut self) {
        match self.service.drinks() {
            Ok(drinks) => self.drinks = drinks,
            Err(e) => error!(error = %e, "error fetching drinks"),
        }
    }

    fn refresh_statistics(&mut self) {
        match self.service.statistics() {
            Ok(stats) => self.dashboard = Dashboard::from_statistics(&stats),
            Err(e) => error!(error = %e, "error fetching statistics"),
        }
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn form(&self) -> &DrinkForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DrinkForm {
        &mut self.form
    }

    pub fn editing(&self) -> Option<DrinkId> {
        self.editing
    }

    /// Loads an existing drink into the form; the next save updates it.
    pub fn edit(&mut self, id: DrinkId) -> Result<()> {
        self.ensure_authenticated()?;
        let drink = self
            .drinks
            .iter()
            .find(|d| d.id == id)
            .ok_or(Error::NotFound { entity: "Drink", id })?;

        self.form = DrinkForm::from_drink(drink);
        self.editing = Some(id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form = DrinkForm::default();
        self.editing = None;
    }

    /// Creates a drink from the form, or updates the one being edited.
    pub fn save_drink(&mut self) -> Result<Drink> {
        self.ensure_authenticated()?;
        let drink = self.form.parse().inspect_err(|e| {
            warn!(reason = %e, "drink form rejected");
        })?;

        let saved = match self.editing {
            Some(id) => self.service.update_drink(id, &drink),
            None => self.service.create_drink(&drink),
        }
        .inspect_err(|e| error!(error = %e, "error saving drink"))?;

        info!(drink_id = saved.id, "drink saved");
        self.cancel_edit();
        self.refresh_drinks();
        self.refresh_statistics();
        self.notice = Some(Notice::success(notice::DRINK_SAVED, self.notice_ttl));

        Ok(saved)
    }

    pub fn delete_drink(&mut self, id: DrinkId) -> Result<()> {
        self.ensure_authenticated()?;
        self.service
            .delete_drink(id)
            .inspect_err(|e| error!(drink_id = id, error = %e, "error deleting drink"))?;

        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.refresh_drinks();
        self.refresh_statistics();
        Ok(())
    }

    /// Clears all orders and statistics once `confirm` agrees. Returns whether
    /// the reset went through.
    pub fn reset_statistics(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool> {
        self.ensure_authenticated()?;
        if !confirm() {
            return Ok(false);
        }

        self.service
            .reset_statistics()
            .inspect_err(|e| error!(error = %e, "error resetting statistics"))?;

        info!("statistics reset");
        self.refresh_statistics();
        self.notice = Some(Notice::success(notice::STATISTICS_RESET, self.notice_ttl));
        Ok(true)
    }

    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        self.ensure_authenticated()?;
        self.settings = self
            .service
            .update_settings(&settings)
            .inspect_err(|e| error!(error = %e, "error saving settings"))?;
        Ok(())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice_at(Instant::now())
    }

    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible(now))
    }
}
