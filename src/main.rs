use actix_cors::Cors;
use actix_web::{get, post, put, web, App, HttpResponse, HttpServer};
use chrono::Utc;
use serde::Deserialize;

use opensplit_ledger::exchange::get_exchanges_for_group;
use opensplit_ledger::settings::Settings;
use opensplit_ledger::store::Store;
use opensplit_ledger::{
    check_expense, resolve_group_balance, Expense, Group, Ledger, LedgerError, User,
};

#[derive(Deserialize)]
struct UserJson {
    name: String,
    email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupJson {
    name: String,
    members: Vec<String>,
    created_by: String,
}

#[derive(Deserialize)]
struct CurrentUser {
    user: String,
}

fn error_response(err: LedgerError) -> HttpResponse {
    match err {
        LedgerError::InvalidExpense(_) => HttpResponse::BadRequest().body(err.to_string()),
        LedgerError::NotFound(_) => HttpResponse::NotFound().body(err.to_string()),
        LedgerError::Database(_) | LedgerError::Settings(_) => {
            tracing::error!("request failed: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

#[put("/users/{id}")]
async fn add_user(store: web::Data<Store>, id: web::Path<String>, json: web::Json<UserJson>) -> HttpResponse {
    let json = json.into_inner();
    let user = User {
        id: id.into_inner(),
        name: json.name,
        email: json.email,
        created_at: Utc::now(),
    };
    match store.add_user(&user).await {
        Ok(()) => HttpResponse::Ok().body("User added"),
        Err(err) => error_response(err),
    }
}

#[put("/groups/{id}")]
async fn add_group(store: web::Data<Store>, id: web::Path<String>, json: web::Json<GroupJson>) -> HttpResponse {
    let json = json.into_inner();
    let group = Group {
        id: id.into_inner(),
        name: json.name,
        members: json.members,
        created_by: json.created_by,
        created_at: Utc::now(),
    };
    match store.add_group(&group).await {
        Ok(()) => HttpResponse::Ok().body("Group added"),
        Err(err) => error_response(err),
    }
}

#[post("/expenses")]
async fn add_expense(store: web::Data<Store>, expense: web::Json<Expense>) -> HttpResponse {
    let expense = expense.into_inner();
    if let Err(err) = check_expense(&expense) {
        tracing::info!("rejected expense {:?}: {err}", expense.id);
        return error_response(err);
    }
    match store.add_expense(&expense).await {
        Ok(()) => HttpResponse::Ok().body("Expense added"),
        Err(err) => error_response(err),
    }
}

#[get("/groups/{id}/balance")]
async fn get_group_balance(
    store: web::Data<Store>,
    id: web::Path<String>,
    query: web::Query<CurrentUser>,
) -> HttpResponse {
    let id = id.into_inner();
    let loaded = async {
        let group = store.find_group(&id).await?;
        let expenses = store.group_expenses(&id).await?;
        let users = store.all_users().await?;
        Ok::<_, LedgerError>((group, expenses, users))
    };
    match loaded.await {
        Ok((group, expenses, users)) => {
            HttpResponse::Ok().json(resolve_group_balance(&group, &expenses, &users, &query.user))
        }
        Err(err) => error_response(err),
    }
}

#[get("/groups/{id}/exchanges")]
async fn get_exchanges(store: web::Data<Store>, id: web::Path<String>) -> HttpResponse {
    let id = id.into_inner();
    let loaded = async {
        let group = store.find_group(&id).await?;
        let expenses = store.group_expenses(&id).await?;
        Ok::<_, LedgerError>((group, expenses))
    };
    match loaded.await {
        Ok((group, expenses)) => HttpResponse::Ok().json(get_exchanges_for_group(&group, &expenses)),
        Err(err) => error_response(err),
    }
}

async fn load_everything(store: &Store) -> Result<(Vec<User>, Vec<Group>, Vec<Expense>), LedgerError> {
    Ok((
        store.all_users().await?,
        store.all_groups().await?,
        store.all_expenses().await?,
    ))
}

#[get("/users/{id}/friends")]
async fn get_friend_balances(store: web::Data<Store>, id: web::Path<String>) -> HttpResponse {
    match load_everything(&store).await {
        Ok((users, groups, expenses)) => {
            let ledger = Ledger::new(&users, &groups, &expenses);
            HttpResponse::Ok().json(ledger.friend_balances(&id))
        }
        Err(err) => error_response(err),
    }
}

#[get("/users/{id}/balance")]
async fn get_user_balance(store: web::Data<Store>, id: web::Path<String>) -> HttpResponse {
    match load_everything(&store).await {
        Ok((users, groups, expenses)) => {
            let ledger = Ledger::new(&users, &groups, &expenses);
            HttpResponse::Ok().json(ledger.summary(&id))
        }
        Err(err) => error_response(err),
    }
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "opensplit_ledger={level}",
            level = settings.log.level
        ))
        .init();

    let store = Store::connect(&settings.mongodb).await?;

    let bind = (settings.server.host.clone(), settings.server.port);
    tracing::info!("Server listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(store.clone()))
            .service(add_user)
            .service(add_group)
            .service(add_expense)
            .service(get_group_balance)
            .service(get_exchanges)
            .service(get_friend_balances)
            .service(get_user_balance)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
