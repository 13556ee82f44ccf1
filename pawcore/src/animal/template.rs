use crate::task::RequiredRole;
use super::{
    OnboardingTask,
    Species,
};

const DOG: &[OnboardingTask] = &[
    OnboardingTask {
        title: "Wash and Groom",
        description: "Give the dog a bath, shave any matted fur, and trim claws.",
        required_role: RequiredRole::Any,
    },
    OnboardingTask {
        title: "Spay/Neuter",
        description: "Spay or neuter the dog, depending on sex.",
        required_role: RequiredRole::Vet,
    },
    OnboardingTask {
        title: "Health Check",
        description: "Administer the disease panel to check for possible diseases the dog may have.",
        required_role: RequiredRole::Vet,
    },
    OnboardingTask {
        title: "Vaccination",
        description: "Give required vaccines to dog (Rabies, Distemper, Parvovirus, Hepatitus)",
        required_role: RequiredRole::Vet,
    },
    OnboardingTask {
        title: "Heartworm Prevention",
        description: "Feed medication for prevention/treatment of Heartworm.",
        required_role: RequiredRole::Regular,
    },
    OnboardingTask {
        title: "Deworming Medication",
        description: "Feed dewormer to dog.",
        required_role: RequiredRole::Regular,
    },
    OnboardingTask {
        title: "Microchip",
        description: "Check for previous microchip and attach one if necessary.",
        required_role: RequiredRole::Vet,
    },
];

const CAT: &[OnboardingTask] = &[
    OnboardingTask {
        title: "Wash and Groom",
        description: "Give the cat a bath, shave any matted fur, and trim claws.",
        required_role: RequiredRole::Any,
    },
    OnboardingTask {
        title: "Spay/Neuter",
        description: "Spay or neuter the cat, depending on sex.",
        required_role: RequiredRole::Vet,
    },
    OnboardingTask {
        title: "Health Check",
        description: "Administer the disease panel to check for possible diseases the cat may have.",
        required_role: RequiredRole::Vet,
    },
    OnboardingTask {
        title: "Vaccination",
        description: "Give required vaccines to cat (Rabies, Distemper, FVR, Calicivirus)",
        required_role: RequiredRole::Vet,
    },
    OnboardingTask {
        title: "Deworming Medication",
        description: "Feed dewormer to cat.",
        required_role: RequiredRole::Regular,
    },
    OnboardingTask {
        title: "Microchip",
        description: "Check for previous microchip and attach one if necessary.",
        required_role: RequiredRole::Vet,
    },
];

const TURTLE: &[OnboardingTask] = &[
    OnboardingTask {
        title: "Wash",
        description: "Clean the turtle.",
        required_role: RequiredRole::Any,
    },
    OnboardingTask {
        title: "Health Check",
        description: "Administer the disease panel to check for possible diseases the turtle may have.",
        required_role: RequiredRole::Vet,
    },
];

impl Species {
    pub fn onboarding_tasks(&self) -> &'static [OnboardingTask] {
        match self {
            Species::Animal => &[],
            Species::Dog => DOG,
            Species::Cat => CAT,
            Species::Turtle => TURTLE,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(Species::Animal.onboarding_tasks().len(), 0);
        assert_eq!(Species::Dog.onboarding_tasks().len(), 7);
        assert_eq!(Species::Cat.onboarding_tasks().len(), 6);
        assert_eq!(Species::Turtle.onboarding_tasks().len(), 2);
    }

    #[test]
    fn dog() {
        let titles = Species::Dog.onboarding_tasks()
            .iter()
            .map(|t| t.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, [
            "Wash and Groom",
            "Spay/Neuter",
            "Health Check",
            "Vaccination",
            "Heartworm Prevention",
            "Deworming Medication",
            "Microchip",
        ]);
        assert_eq!(Species::Dog.onboarding_tasks()[4].required_role, RequiredRole::Regular);
    }

    #[test]
    fn cat_has_no_heartworm() {
        assert!(Species::Cat.onboarding_tasks()
            .iter()
            .all(|t| t.title != "Heartworm Prevention"));
        assert_eq!(
            Species::Cat.onboarding_tasks()[3].description,
            "Give required vaccines to cat (Rabies, Distemper, FVR, Calicivirus)",
        );
    }
}
