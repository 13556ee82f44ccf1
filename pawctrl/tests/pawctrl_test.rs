use pawcore::{
    animal::{
        AnimalKind,
        Cat,
        Dog,
        NewAnimal,
        Species,
        Turtle,
    },
    form::IntakeForm,
    person::{
        PersonKind,
        PersonType,
    },
    task::{
        CompletionStatus,
        NewTask,
        RequiredRole,
        TaskQuery,
        TaskSortKey,
        TaskUpdate,
    },
};
use pawctrl::error::{
    CtrlError,
    PlatformError,
};

use test_paw::ctrl::create_sqlite_platform_with_staff;

fn animal(name: &str, shelter_id: i64, kind: AnimalKind) -> NewAnimal {
    NewAnimal {
        name: name.into(),
        color: "brown".into(),
        description: "Friendly".into(),
        shelter_id,
        kind,
        ..Default::default()
    }
}

fn intake_form(email: &str) -> IntakeForm {
    IntakeForm {
        name: "Ada Lovelace".into(),
        phone_number: "555-0199".into(),
        email: email.into(),
        address_one: "12 Analytical Way".into(),
        address_two: "".into(),
        city: "London".into(),
        state: "LDN".into(),
        postal: "N1".into(),
        country: "UK".into(),
        shelter: None,
    }
}

#[async_std::test]
async fn onboarding_tasks_per_species() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let kinds = [
        AnimalKind::Dog(Dog { breed: "Beagle".into(), is_fixed: false }),
        AnimalKind::Cat(Cat { breed: "Tabby".into(), is_fixed: true }),
        AnimalKind::Turtle(Turtle { species: "Box turtle".into() }),
        AnimalKind::Animal,
    ];
    for kind in kinds.into_iter() {
        let species = kind.species();
        let id = platform.create_animal(&animal("Rex", staff.shelter_id, kind)).await?;
        let tasks = platform.list_tasks(&TaskQuery::new().animal_id(id)).await?;
        let template = species.onboarding_tasks();
        assert_eq!(tasks.len(), template.len(), "task count for {species}");
        for entry in template.iter() {
            let task = tasks.iter()
                .find(|task| task.title == entry.title)
                .expect("task from the template");
            assert_eq!(task.description, entry.description);
            assert_eq!(task.required_role, entry.required_role);
            assert_eq!(task.shelter_id, staff.shelter_id);
            assert_eq!(task.animal_id, Some(id));
            assert!(!task.is_completed());
        }
    }
    assert_eq!(Species::Animal.onboarding_tasks().len(), 0);
    assert_eq!(platform.list_tasks(&TaskQuery::new()).await?.len(), 15);
    Ok(())
}

#[async_std::test]
async fn update_animal_creates_no_task() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let mut dog = animal(
        "Rex",
        staff.shelter_id,
        AnimalKind::Dog(Dog { breed: "Beagle".into(), is_fixed: false }),
    );
    let id = platform.create_animal(&dog).await?;
    dog.ready_to_adopt = true;
    dog.kind = AnimalKind::Dog(Dog { breed: "Beagle".into(), is_fixed: true });
    platform.update_animal(id, &dog).await?;
    assert_eq!(platform.list_tasks(&TaskQuery::new()).await?.len(), 7);

    let updated = platform.get_animal(id).await?;
    assert!(updated.ready_to_adopt);
    assert_eq!(updated.kind, dog.kind);

    dog.kind = AnimalKind::Turtle(Turtle::default());
    assert!(matches!(
        platform.update_animal(id, &dog).await,
        Err(PlatformError::CtrlError(CtrlError::KindMismatch(_))),
    ));
    assert!(matches!(
        platform.update_animal(id + 100, &dog).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound(_))),
    ));
    Ok(())
}

#[async_std::test]
async fn task_completion() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let id = platform.create_animal(&animal(
        "Shelly",
        staff.shelter_id,
        AnimalKind::Turtle(Turtle { species: "Box turtle".into() }),
    )).await?;
    let tasks = platform.list_tasks(&TaskQuery::new().animal_id(id)).await?;
    let wash = tasks.iter().find(|task| task.title == "Wash").expect("wash");
    let check = tasks.iter().find(|task| task.title == "Health Check").expect("check");

    assert!(matches!(
        platform.complete_task(&staff.regular, check.id).await,
        Err(PlatformError::CtrlError(CtrlError::RoleRequired { .. })),
    ));
    assert!(platform.complete_task(&staff.regular, wash.id).await?.is_completed());
    assert!(platform.complete_task(&staff.vet, check.id).await?.is_completed());

    let completed = platform.list_tasks(
        &TaskQuery::new().status(CompletionStatus::Completed)
    ).await?;
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|task| task.completed_ts.is_some()));

    assert!(!platform.reopen_task(wash.id).await?.is_completed());
    let incomplete = platform.list_tasks(
        &TaskQuery::new().status(CompletionStatus::Incomplete)
    ).await?;
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, wash.id);
    assert_eq!(platform.list_tasks(&TaskQuery::new()).await?.len(), 2);

    assert!(matches!(
        platform.delete_task(&staff.vet, wash.id).await,
        Err(PlatformError::CtrlError(CtrlError::RoleRequired { .. })),
    ));
    platform.delete_task(&staff.manager, wash.id).await?;
    assert!(platform.get_task(wash.id).await
        .expect_err("deleted")
        .is_not_found());
    Ok(())
}

#[async_std::test]
async fn task_edit_and_items() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let id = platform.add_task(&NewTask {
        title: "Order food".into(),
        shelter_id: staff.shelter_id,
        items: vec!["Kibble".into(), "Hay".into()],
        ..Default::default()
    }).await?;
    let task = platform.get_task(id).await?;
    assert_eq!(task.required_role, RequiredRole::Any);
    assert_eq!(task.due_ts - task.created_ts, 7 * 24 * 60 * 60);
    let items = task.items.clone().expect("items loaded");
    assert_eq!(items.len(), 2);

    let item = platform.toggle_task_item(id, items[0].id).await?;
    assert!(item.is_completed());
    let item = platform.toggle_task_item(id, items[0].id).await?;
    assert!(!item.is_completed());

    let new_item = platform.add_task_item(id, "Litter").await?;
    assert_eq!(platform.list_task_items(id).await?.len(), 3);
    assert!(platform.list_task_items(id).await?.iter().any(|item| item.id == new_item));
    assert!(matches!(
        platform.add_task_item(id + 100, "Nothing").await,
        Err(PlatformError::CtrlError(CtrlError::NotFound(_))),
    ));

    let mut update = TaskUpdate::from(&task);
    update.title = "Order more food".into();
    update.assignee_id = Some(staff.regular.person_id);
    platform.update_task(id, &update).await?;
    let task = platform.get_task(id).await?;
    assert_eq!(task.title, "Order more food");
    assert_eq!(task.assignee_id, Some(staff.regular.person_id));
    let assigned = platform.list_tasks(
        &TaskQuery::new().assignee_id(staff.regular.person_id)
    ).await?;
    assert_eq!(assigned.len(), 1);
    Ok(())
}

fn invalid_fields(result: Result<impl std::fmt::Debug, PlatformError>) -> Vec<String> {
    match result {
        Err(PlatformError::ValidationError(errors)) => errors.keys().cloned().collect(),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[async_std::test]
async fn task_references_must_exist() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let task = |shelter_id, assignee_id, animal_id| NewTask {
        title: "Walk".into(),
        shelter_id,
        assignee_id,
        animal_id,
        ..Default::default()
    };

    assert_eq!(
        invalid_fields(platform.add_task(&task(staff.shelter_id, Some(999), None)).await),
        ["assignee"],
    );
    assert_eq!(
        invalid_fields(platform.add_task(&task(staff.shelter_id, None, Some(999))).await),
        ["animal"],
    );
    assert_eq!(
        invalid_fields(platform.add_task(&task(staff.shelter_id + 100, None, None)).await),
        ["shelter"],
    );
    assert_eq!(
        invalid_fields(platform.add_task(&task(staff.shelter_id + 100, Some(999), Some(999))).await),
        ["animal", "assignee", "shelter"],
    );

    // an adopter is a person but cannot be assigned work
    let rex = platform.create_animal(&animal("Rex", staff.shelter_id, AnimalKind::Animal)).await?;
    let adopter = platform.adopt(rex, &intake_form("ada@example.com")).await?.person_id;
    assert_eq!(
        invalid_fields(platform.add_task(&task(staff.shelter_id, Some(adopter), None)).await),
        ["assignee"],
    );
    assert!(platform.list_tasks(&TaskQuery::new()).await?
        .iter()
        .all(|task| task.title != "Walk"));

    let id = platform.add_task(&task(staff.shelter_id, Some(staff.vet.person_id), Some(rex))).await?;
    let mut update = TaskUpdate::from(&platform.get_task(id).await?);
    update.assignee_id = Some(adopter);
    assert_eq!(invalid_fields(platform.update_task(id, &update).await), ["assignee"]);
    update.assignee_id = None;
    update.animal_id = Some(rex + 100);
    assert_eq!(invalid_fields(platform.update_task(id, &update).await), ["animal"]);

    let task = platform.get_task(id).await?;
    assert_eq!(task.assignee_id, Some(staff.vet.person_id));
    assert_eq!(task.animal_id, Some(rex));
    Ok(())
}

#[async_std::test]
async fn animal_shelter_must_exist() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let mut dog = animal(
        "Rex",
        staff.shelter_id + 100,
        AnimalKind::Dog(Dog { breed: "Beagle".into(), is_fixed: false }),
    );
    assert_eq!(invalid_fields(platform.create_animal(&dog).await), ["shelter"]);
    assert!(platform.list_tasks(&TaskQuery::new()).await?.is_empty());

    dog.shelter_id = staff.shelter_id;
    let id = platform.create_animal(&dog).await?;
    dog.shelter_id = staff.shelter_id + 100;
    assert_eq!(invalid_fields(platform.update_animal(id, &dog).await), ["shelter"]);
    assert_eq!(platform.get_animal(id).await?.shelter_id, staff.shelter_id);
    Ok(())
}

#[async_std::test]
async fn task_sorting() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    for (title, due_ts) in [("Bravo", 30), ("Alpha", 20), ("Charlie", 10)] {
        platform.add_task(&NewTask {
            title: title.into(),
            shelter_id: staff.shelter_id,
            due_ts: Some(due_ts),
            ..Default::default()
        }).await?;
    }
    let titles = |tasks: pawcore::task::Tasks| tasks.iter()
        .map(|task| task.title.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        titles(platform.list_tasks(&TaskQuery::new()).await?),
        ["Alpha", "Bravo", "Charlie"],
    );
    assert_eq!(
        titles(platform.list_tasks(&TaskQuery::new().sort(TaskSortKey::DueDate)).await?),
        ["Charlie", "Alpha", "Bravo"],
    );
    assert_eq!(
        titles(platform.list_tasks(&TaskQuery::new().sort("hacked_field".into())).await?),
        ["Alpha", "Bravo", "Charlie"],
    );
    Ok(())
}

#[async_std::test]
async fn adoption_intake_reuses_records() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let id = platform.create_animal(&animal("Whiskers", staff.shelter_id, AnimalKind::Animal)).await?;

    let first = platform.adopt(id, &intake_form("ada@example.com")).await?;
    let second = platform.adopt(id, &intake_form("ada@example.com")).await?;
    assert_eq!(first.address_id, second.address_id);
    assert_eq!(first.person_id, second.person_id);
    assert_ne!(first.task_id, second.task_id);

    let person = platform.get_person(first.person_id).await?;
    assert_eq!(person.person_type(), PersonType::Adopter);
    assert!(matches!(person.kind, PersonKind::Adopter(ref adopter) if adopter.can_adopt));

    let task = platform.get_task(first.task_id).await?;
    assert_eq!(task.shelter_id, staff.shelter_id);
    assert_eq!(task.animal_id, Some(id));
    assert_eq!(task.required_role, RequiredRole::Manager);
    assert_eq!(task.items.expect("items loaded").len(), 4);

    // an existing person is reused regardless of kind
    let worker = platform.adopt(id, &intake_form("vet@example.com")).await?;
    assert_eq!(worker.person_id, staff.vet.person_id);

    let mut invalid = intake_form("not an email");
    invalid.city = "".into();
    match platform.adopt(id, &invalid).await {
        Err(PlatformError::ValidationError(errors)) => {
            assert!(errors.contains_key("email"));
            assert!(errors.contains_key("city"));
        }
        _ => panic!("expected a validation error"),
    }
    assert!(matches!(
        platform.adopt(id + 100, &intake_form("ada@example.com")).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound(_))),
    ));
    Ok(())
}

#[async_std::test]
async fn volunteer_intake() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    match platform.volunteer(&intake_form("grace@example.com")).await {
        Err(PlatformError::ValidationError(errors)) => {
            assert!(errors.contains_key("shelter"));
        }
        _ => panic!("expected a validation error"),
    }

    let mut form = intake_form("grace@example.com");
    form.shelter = Some(staff.shelter_id);
    let outcome = platform.volunteer(&form).await?;
    let person = platform.get_person(outcome.person_id).await?;
    assert!(matches!(
        person.kind,
        PersonKind::Volunteer(ref volunteer) if volunteer.shelter_id == staff.shelter_id
    ));
    let task = platform.get_task(outcome.task_id).await?;
    assert_eq!(task.animal_id, None);
    assert_eq!(task.required_role, RequiredRole::Manager);
    assert_eq!(task.items.expect("items loaded").len(), 3);

    form.shelter = Some(staff.shelter_id + 100);
    match platform.volunteer(&form).await {
        Err(PlatformError::ValidationError(errors)) => {
            assert_eq!(errors.keys().collect::<Vec<_>>(), ["shelter"]);
        }
        _ => panic!("expected a validation error"),
    }
    Ok(())
}

#[async_std::test]
async fn volunteer_reports_every_field() -> anyhow::Result<()> {
    let (platform, _) = create_sqlite_platform_with_staff().await?;
    let mut form = intake_form("not an email");
    form.city = "".into();
    match platform.volunteer(&form).await {
        Err(PlatformError::ValidationError(errors)) => {
            assert!(errors.contains_key("email"));
            assert!(errors.contains_key("city"));
            assert!(errors.contains_key("shelter"));
        }
        _ => panic!("expected a validation error"),
    }
    Ok(())
}

#[async_std::test]
async fn comments_and_dashboard() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let id = platform.create_animal(&animal(
        "Shelly",
        staff.shelter_id,
        AnimalKind::Turtle(Turtle { species: "Box turtle".into() }),
    )).await?;
    let tasks = platform.list_tasks(&TaskQuery::new()).await?;

    platform.add_task_comment(Some(&staff.vet), tasks[0].id, "Shell looks healthy").await?;
    platform.add_task_comment(None, tasks[0].id, "Left a note").await?;
    platform.add_animal_comment(Some(&staff.manager), id, "Very calm").await?;
    assert!(matches!(
        platform.add_animal_comment(None, id, "   ").await,
        Err(PlatformError::ValidationError(_)),
    ));

    let comments = platform.list_task_comments(tasks[0].id).await?;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].person_id, Some(staff.vet.person_id));
    assert_eq!(comments[1].person_id, None);
    assert_eq!(platform.list_animal_comments(id).await?.len(), 1);

    let dashboard = platform.dashboard(&TaskQuery::new()).await?;
    assert_eq!(dashboard.tasks.len(), 2);
    assert_eq!(dashboard.animals.len(), 1);
    assert_eq!(dashboard.workers.len(), 3);
    let detail = dashboard.tasks.iter()
        .find(|detail| detail.task.id == tasks[0].id)
        .expect("task on the dashboard");
    assert_eq!(detail.comments.len(), 2);
    assert!(detail.task.items.is_some());
    Ok(())
}

#[async_std::test]
async fn staff_login() -> anyhow::Result<()> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    let session = platform.ac_platform
        .authenticate_user_login("vet", "vet", "localhost".into())
        .await?;
    let actor = platform.get_actor(session.user().name()).await?;
    assert_eq!(actor, staff.vet);
    assert!(matches!(
        platform.get_actor("nobody").await,
        Err(PlatformError::CtrlError(CtrlError::NotAWorker(_))),
    ));
    Ok(())
}
