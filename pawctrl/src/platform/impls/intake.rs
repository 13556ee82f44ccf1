use pawcore::{
    address::NewAddress,
    error::ValidationError,
    form::{
        Applicant,
        IntakeForm,
        REQUIRED,
    },
    person::{
        Adopter,
        NewPerson,
        PersonKind,
        Volunteer,
    },
    task::{
        NewTask,
        RequiredRole,
    },
};

use crate::{
    error::PlatformError,
    platform::{
        IntakeOutcome,
        Platform,
    },
};
use super::reference::References;

const ADOPTION_CHECKLIST: &[&str] = &[
    "Contact the applicant",
    "Check references",
    "Schedule a meet and greet",
    "Arrange a home visit",
];

const VOLUNTEER_CHECKLIST: &[&str] = &[
    "Contact the applicant",
    "Complete the background check",
    "Schedule orientation",
];

fn checklist(items: &[&str]) -> Vec<String> {
    items.iter()
        .map(|item| item.to_string())
        .collect()
}

impl Platform {
    /// The id of the address matching every field, created if absent.
    pub async fn resolve_address(
        &self,
        address: &NewAddress,
    ) -> Result<i64, PlatformError> {
        let address = address.clone().normalize();
        match self.sm_platform.find_address(&address).await? {
            Some(existing) => Ok(existing.id),
            None => Ok(self.sm_platform.add_address(&address).await?),
        }
    }

    /// The id of the person with the applicant's email, which may be of
    /// any kind; otherwise a new person of the provided kind.
    async fn resolve_applicant(
        &self,
        applicant: &Applicant,
        address_id: i64,
        kind: PersonKind,
    ) -> Result<i64, PlatformError> {
        if let Some(person) = self.sm_platform
            .find_person_by_email(&applicant.email)
            .await?
        {
            log::trace!("reusing person {} for {:?}", person.id, applicant.email);
            return Ok(person.id);
        }
        let id = self.sm_platform
            .add_person(&NewPerson {
                name: applicant.name.clone(),
                phone_number: applicant.phone_number.clone(),
                email: applicant.email.clone(),
                address_id,
                kind,
            })
            .await?;
        log::info!("registered {} {:?} as person {id}", applicant.name, applicant.email);
        Ok(id)
    }

    /// Record an application to adopt the animal, leaving a task for the
    /// managers at its shelter to follow up.
    pub async fn adopt(
        &self,
        animal_id: i64,
        form: &IntakeForm,
    ) -> Result<IntakeOutcome, PlatformError> {
        let applicant = form.validate()?;
        let animal = self.get_animal(animal_id).await?;
        let address_id = self.resolve_address(&applicant.address).await?;
        let person_id = self.resolve_applicant(
            &applicant,
            address_id,
            PersonKind::Adopter(Adopter { can_adopt: true }),
        ).await?;
        let task_id = self.add_task(&NewTask {
            title: format!("Adoption application for {}", animal.name),
            description: format!(
                "{} ({}, {}) has applied to adopt {}.",
                applicant.name,
                applicant.email,
                applicant.phone_number,
                animal.name,
            ),
            shelter_id: animal.shelter_id,
            required_role: RequiredRole::Manager,
            animal_id: Some(animal.id),
            items: checklist(ADOPTION_CHECKLIST),
            ..Default::default()
        }).await?;
        Ok(IntakeOutcome { address_id, person_id, task_id })
    }

    /// Record an application to volunteer at the shelter selected on the
    /// form, leaving a task for the managers there to follow up.
    pub async fn volunteer(
        &self,
        form: &IntakeForm,
    ) -> Result<IntakeOutcome, PlatformError> {
        let (applicant, mut errors) = match form.validate() {
            Ok(applicant) => (Some(applicant), ValidationError::new()),
            Err(errors) => (None, errors),
        };
        if form.shelter.is_none() {
            errors.add("shelter", REQUIRED);
        }
        let (Some(applicant), Some(shelter_id)) = (applicant, form.shelter) else {
            return Err(errors.into());
        };
        self.check_references(References {
            shelter_id: Some(shelter_id),
            ..Default::default()
        }).await?;
        let shelter = self.get_shelter(shelter_id).await?;
        let address_id = self.resolve_address(&applicant.address).await?;
        let person_id = self.resolve_applicant(
            &applicant,
            address_id,
            PersonKind::Volunteer(Volunteer {
                start_ts: self.now(),
                shelter_id: shelter.id,
            }),
        ).await?;
        let task_id = self.add_task(&NewTask {
            title: format!("Volunteer application from {}", applicant.name),
            description: format!(
                "{} ({}, {}) has applied to volunteer at {}.",
                applicant.name,
                applicant.email,
                applicant.phone_number,
                shelter.name,
            ),
            shelter_id: shelter.id,
            required_role: RequiredRole::Manager,
            items: checklist(VOLUNTEER_CHECKLIST),
            ..Default::default()
        }).await?;
        Ok(IntakeOutcome { address_id, person_id, task_id })
    }
}
