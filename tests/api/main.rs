mod health_check;
mod signups;
