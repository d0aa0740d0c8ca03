mod delete_account;
mod get_account;
mod helpers;
mod list_accounts;
mod login;
mod scenario;
mod verify_token;
