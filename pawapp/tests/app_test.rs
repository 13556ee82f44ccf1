use axum::{
    Router,
    body::Body,
};
use http::{
    Request,
    StatusCode,
    header,
};
use pawapp::server;
use pawcore::{
    animal::{
        AnimalKind,
        Dog,
        NewAnimal,
        Sex,
    },
    person::WorkerRole,
    task::TaskQuery,
};
use pawctrl::platform::{
    NewWorker,
    Platform,
};
use serde_json::Value;
use test_paw::ctrl::{
    Staff,
    create_sqlite_platform_with_staff,
    shelter_address,
};
use tower::ServiceExt;

struct Response {
    status: StatusCode,
    cookie: Option<String>,
    body: Value,
}

async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let cookie = response.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(String::from);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok(Response { status, cookie, body })
}

fn get(uri: &str, cookie: Option<&str>) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    Ok(builder.body(Body::empty())?)
}

fn post(uri: &str, cookie: Option<&str>, form: &str) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    Ok(builder.body(Body::from(form.to_string()))?)
}

async fn login(app: &Router, username: &str) -> anyhow::Result<String> {
    let response = send(app, post(
        "/login",
        None,
        &format!("username={username}&password={username}"),
    )?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], username);
    Ok(response.cookie.expect("login sets the session cookie"))
}

async fn setup() -> anyhow::Result<(Router, Platform, Staff)> {
    let (platform, staff) = create_sqlite_platform_with_staff().await?;
    Ok((server::app(platform.clone()), platform, staff))
}

async fn add_dog(platform: &Platform, staff: &Staff, name: &str, sex: Sex) -> anyhow::Result<i64> {
    Ok(platform.create_animal(&NewAnimal {
        name: name.into(),
        color: "brown".into(),
        sex: Some(sex),
        shelter_id: staff.shelter_id,
        kind: AnimalKind::Dog(Dog { breed: "Beagle".into(), is_fixed: false }),
        ..Default::default()
    }).await?)
}

#[tokio::test]
async fn public_listing() -> anyhow::Result<()> {
    let (app, platform, staff) = setup().await?;
    let rex = add_dog(&platform, &staff, "Rex", Sex::Male).await?;
    add_dog(&platform, &staff, "Daisy", Sex::Female).await?;

    let response = send(&app, get("/", None)?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));

    let response = send(&app, get("/animals?sex=F", None)?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["name"], "Daisy");
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));

    let response = send(&app, get("/animals?location=Springfield+Shelter&color=brown", None)?).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));
    let response = send(&app, get("/animals?location=Elsewhere", None)?).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));
    let response = send(&app, get("/animals?sex=X", None)?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, get("/animal_list", None)?).await?;
    assert_eq!(response.body["shelter_names"][0], "Springfield Shelter");

    let response = send(&app, get(&format!("/animal/{rex}"), None)?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["kind"]["type"], "Dog");
    assert_eq!(response.body["kind"]["breed"], "Beagle");
    assert!(response.body.get("comments").is_none());

    let response = send(&app, get("/animal/999", None)?).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "404 Not Found");

    let response = send(&app, get("/volunteer", None)?).await?;
    assert_eq!(response.body[0]["name"], "Springfield Shelter");
    Ok(())
}

#[tokio::test]
async fn login_logout() -> anyhow::Result<()> {
    let (app, _, _) = setup().await?;
    let response = send(&app, get("/dashboard", None)?).await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = send(&app, post("/login", None, "username=vet&password=wrong")?).await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let response = send(&app, post("/login", None, "username=nobody&password=nobody")?).await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let cookie = login(&app, "vet").await?;
    let response = send(&app, get("/dashboard", Some(&cookie))?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["workers"].as_array().map(Vec::len), Some(3));

    let response = send(&app, post("/logout", Some(&cookie), "")?).await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = send(&app, get("/dashboard", Some(&cookie))?).await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn animal_intake_and_tasks() -> anyhow::Result<()> {
    let (app, platform, _) = setup().await?;
    let cookie = login(&app, "regular").await?;

    let response = send(&app, post("/animals", Some(&cookie), "name=Rex&color=brown")?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["kind"]["type"], "Animal");
    assert_eq!(platform.list_tasks(&TaskQuery::new()).await?.len(), 0);

    let response = send(&app, post(
        "/animals",
        Some(&cookie),
        "name=Tom&color=grey&species=cat&breed=Tabby",
    )?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().expect("animal id");

    let response = send(&app, post("/animals", Some(&cookie), "name=&species=cow")?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"].get("name").is_some());
    assert!(response.body["fields"].get("species").is_some());

    let response = send(&app, get(&format!("/dashboard?animal={id}"), Some(&cookie))?).await?;
    assert_eq!(response.body["tasks"].as_array().map(Vec::len), Some(6));

    // updates generate nothing
    let response = send(&app, post(
        &format!("/animal/{id}"),
        Some(&cookie),
        "name=Tom&color=grey&species=cat&breed=Tabby&is_fixed=on",
    )?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["kind"]["is_fixed"], true);
    assert_eq!(platform.list_tasks(&TaskQuery::new()).await?.len(), 6);

    let response = send(&app, post(
        &format!("/animal/{id}"),
        Some(&cookie),
        "name=Tom&color=grey&species=turtle&turtle_species=Box",
    )?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, post(
        "/tasks/sort",
        Some(&cookie),
        "sort=hacked_field",
    )?).await?;
    let by_title = send(&app, post("/tasks/sort", Some(&cookie), "sort=title")?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, by_title.body);

    let response = send(&app, post(
        &format!("/animal/{id}/comment"),
        Some(&cookie),
        "text=Purrs+a+lot",
    )?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    let response = send(&app, get(&format!("/animal/{id}"), Some(&cookie))?).await?;
    assert_eq!(response.body["comments"][0]["text"], "Purrs a lot");

    let response = send(&app, post(&format!("/animal/{id}/delete"), Some(&cookie), "")?).await?;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let manager = login(&app, "manager").await?;
    let response = send(&app, post(&format!("/animal/{id}/delete"), Some(&manager), "")?).await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = send(&app, get(&format!("/animal/{id}"), None)?).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn animal_edit_keeps_its_shelter() -> anyhow::Result<()> {
    let (app, platform, staff) = setup().await?;
    let rex = add_dog(&platform, &staff, "Rex", Sex::Male).await?;
    let other = platform.create_shelter(
        "Shelbyville Shelter",
        "555-0200",
        "shelbyville@example.com",
        &shelter_address(),
    ).await?;
    platform.hire_worker(&NewWorker {
        name: "Visiting worker".into(),
        phone_number: "555-0201".into(),
        email: "visitor@example.com".into(),
        address_id: platform.resolve_address(&shelter_address()).await?,
        username: "visitor".into(),
        role: WorkerRole::Regular,
        shelter_id: other,
    }, "visitor").await?;
    let cookie = login(&app, "visitor").await?;

    let response = send(&app, post(
        &format!("/animal/{rex}"),
        Some(&cookie),
        "name=Rex&color=black&species=dog&breed=Beagle",
    )?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["color"], "black");
    assert_eq!(response.body["shelter_id"], staff.shelter_id);

    let response = send(&app, post(
        &format!("/animal/{rex}"),
        Some(&cookie),
        &format!("name=Rex&color=black&species=dog&breed=Beagle&shelter={other}"),
    )?).await?;
    assert_eq!(response.body["shelter_id"], other);

    let response = send(&app, post(
        &format!("/animal/{rex}"),
        Some(&cookie),
        "name=Rex&color=black&species=dog&breed=Beagle&shelter=999",
    )?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"].get("shelter").is_some());

    let response = send(&app, post("/animal/999", Some(&cookie), "name=Rex")?).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn task_form_references_are_fields() -> anyhow::Result<()> {
    let (app, platform, staff) = setup().await?;
    let rex = add_dog(&platform, &staff, "Rex", Sex::Male).await?;
    let cookie = login(&app, "regular").await?;

    let response = send(&app, post("/tasks", Some(&cookie), "title=Walk&description=Around+the+block&assignee=999")?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"].get("assignee").is_some());
    let response = send(&app, post("/tasks", Some(&cookie), "title=Walk&description=Around+the+block&animal=999")?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"].get("animal").is_some());

    let response = send(&app, post(
        "/tasks",
        Some(&cookie),
        &format!("title=Walk&description=Around+the+block&assignee={}&animal={rex}", staff.regular.person_id),
    )?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().expect("task id");

    let response = send(&app, post(&format!("/task/{id}"), Some(&cookie), "title=Walk&description=Around+the+block&assignee=999")?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"].get("assignee").is_some());
    Ok(())
}

#[tokio::test]
async fn task_workflow() -> anyhow::Result<()> {
    let (app, _, _) = setup().await?;
    let regular = login(&app, "regular").await?;
    let vet = login(&app, "vet").await?;

    let response = send(&app, post(
        "/tasks",
        Some(&regular),
        "title=Checkup&description=Yearly+checkup&required_role=VT&items=Weigh%0ABlood+test",
    )?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().expect("task id");
    assert_eq!(response.body["items"].as_array().map(Vec::len), Some(2));
    let item = response.body["items"][0]["id"].as_i64().expect("item id");

    let response = send(&app, post(&format!("/task/{id}/complete"), Some(&regular), "")?).await?;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = send(&app, post(&format!("/task/{id}/complete"), Some(&vet), "")?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["completed_ts"].is_i64());

    let response = send(&app, post(
        "/tasks/filter",
        Some(&vet),
        "completion_status=incomplete&assignee=&animal=",
    )?).await?;
    assert_eq!(response.body["tasks"].as_array().map(Vec::len), Some(0));
    let response = send(&app, post(&format!("/task/{id}/reopen"), Some(&regular), "")?).await?;
    assert!(response.body["completed_ts"].is_null());

    let response = send(&app, post(
        &format!("/task/{id}/item/{item}/toggle"),
        Some(&regular),
        "",
    )?).await?;
    assert!(response.body["completed_ts"].is_i64());
    let response = send(&app, post(
        &format!("/task/{id}/item/{}/toggle", item + 100),
        Some(&regular),
        "",
    )?).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let response = send(&app, post(&format!("/task/{id}/item"), Some(&regular), "title=Vaccines")?).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(3));

    let response = send(&app, post(&format!("/task/{id}/comment"), Some(&vet), "text=All+good")?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    let response = send(&app, post(&format!("/task/{id}/comment"), Some(&vet), "text=")?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, post(
        &format!("/task/{id}"),
        Some(&regular),
        "title=Annual+checkup&description=Yearly+checkup&required_role=NA",
    )?).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Annual checkup");
    assert_eq!(response.body["comments"].as_array().map(Vec::len), Some(1));

    let response = send(&app, post(&format!("/task/{id}/delete"), Some(&vet), "")?).await?;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let manager = login(&app, "manager").await?;
    let response = send(&app, post(&format!("/task/{id}/delete"), Some(&manager), "")?).await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = send(&app, get(&format!("/task/{id}"), Some(&manager))?).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn adoption_and_volunteering() -> anyhow::Result<()> {
    let (app, platform, staff) = setup().await?;
    let rex = add_dog(&platform, &staff, "Rex", Sex::Male).await?;
    let form = "name=Ada+Lovelace&phone_number=555-0100&email=ada%40example.com\
        &address_one=1+Main+Street&address_two=&city=Springfield&state=IL\
        &postal=62701&country=USA";

    let first = send(&app, post(&format!("/animal/{rex}/adopt"), None, form)?).await?;
    assert_eq!(first.status, StatusCode::CREATED);
    let second = send(&app, post(&format!("/animal/{rex}/adopt"), None, form)?).await?;
    assert_eq!(first.body["person_id"], second.body["person_id"]);
    assert_eq!(first.body["address_id"], second.body["address_id"]);

    let response = send(&app, post(&format!("/animal/{rex}/adopt"), None, "name=Ada")?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["fields"]["email"][0], "This field is required.");
    let response = send(&app, post("/animal/999/adopt", None, form)?).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = send(&app, post("/volunteer", None, form)?).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["fields"].get("shelter").is_some());
    let response = send(&app, post(
        "/volunteer",
        None,
        &format!("{form}&shelter={}", staff.shelter_id),
    )?).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    // the adopter applying to volunteer remains the same person
    assert_eq!(response.body["person_id"], first.body["person_id"]);
    Ok(())
}
