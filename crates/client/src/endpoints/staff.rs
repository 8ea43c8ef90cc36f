use serde::Serialize;

use backoffice_core::RecordId;
use backoffice_core::models::{Employee, NewEmployee};

use super::EMPLOYEES;
use crate::{ApiClient, ApiResult};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub async fn list_employees(client: &ApiClient) -> ApiResult<Vec<Employee>> {
    client.list(&EMPLOYEES).await
}

pub async fn get_employee(client: &ApiClient, id: &RecordId) -> ApiResult<Employee> {
    client.fetch(&EMPLOYEES, id).await
}

/// Validated locally before it is sent.
pub async fn create_employee(client: &ApiClient, employee: &NewEmployee) -> ApiResult<Employee> {
    employee.validate()?;
    client.create(&EMPLOYEES, employee).await
}

pub async fn update_employee(
    client: &ApiClient,
    id: &RecordId,
    update: &EmployeeUpdate,
) -> ApiResult<Employee> {
    client.update(&EMPLOYEES, id, update).await
}

pub async fn delete_employee(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&EMPLOYEES, id).await
}
