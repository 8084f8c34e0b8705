//! Catalog CRUD endpoints
//!
//! Every catalog follows the same triad: GET the collection, POST to
//! create/update (`id` present only on update), DELETE by id. Groups are the
//! one exception with a dedicated `POST /groups/update` and `GET /groups/{id}`.

use shared::models::{
    FlightPackage, FlightPackageCreate, FlightPackageUpdate, Group, GroupCreate, GroupProgram,
    GroupProgramCreate, GroupProgramUpdate, GroupUpdate, Hotel, HotelCreate, HotelUpdate, Package,
    PackageCreate, PackageUpdate, Transfer, TransferCreate, TransferUpdate,
};
use shared::response::Ack;

use crate::endpoints;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl HttpClient {
    // ========== Hotels ==========

    pub async fn list_hotels(&self) -> ClientResult<Vec<Hotel>> {
        self.get(endpoints::HOTELS).await
    }

    pub async fn create_hotel(&self, hotel: &HotelCreate) -> ClientResult<Ack> {
        self.post(endpoints::HOTELS, hotel).await
    }

    pub async fn update_hotel(&self, hotel: &HotelUpdate) -> ClientResult<Ack> {
        self.post(endpoints::HOTELS, hotel).await
    }

    pub async fn delete_hotel(&self, id: &str) -> ClientResult<()> {
        self.delete(&endpoints::entity(endpoints::HOTELS, id)).await
    }

    // ========== Groups ==========

    pub async fn list_groups(&self) -> ClientResult<Vec<Group>> {
        self.get(endpoints::GROUPS).await
    }

    pub async fn get_group(&self, id: &str) -> ClientResult<Group> {
        self.get(&endpoints::entity(endpoints::GROUPS, id)).await
    }

    pub async fn create_group(&self, group: &GroupCreate) -> ClientResult<Ack> {
        self.post(endpoints::GROUPS, group).await
    }

    pub async fn update_group(&self, group: &GroupUpdate) -> ClientResult<Ack> {
        self.post(endpoints::GROUPS_UPDATE, group).await
    }

    pub async fn delete_group(&self, id: &str) -> ClientResult<()> {
        self.delete(&endpoints::entity(endpoints::GROUPS, id)).await
    }

    // ========== Group Programs ==========

    pub async fn list_group_programs(&self) -> ClientResult<Vec<GroupProgram>> {
        self.get(endpoints::GROUP_PROGRAMS).await
    }

    pub async fn create_group_program(&self, program: &GroupProgramCreate) -> ClientResult<Ack> {
        self.post(endpoints::GROUP_PROGRAMS, program).await
    }

    pub async fn update_group_program(&self, program: &GroupProgramUpdate) -> ClientResult<Ack> {
        self.post(endpoints::GROUP_PROGRAMS, program).await
    }

    pub async fn delete_group_program(&self, id: &str) -> ClientResult<()> {
        self.delete(&endpoints::entity(endpoints::GROUP_PROGRAMS, id))
            .await
    }

    // ========== Transfers ==========

    pub async fn list_transfers(&self) -> ClientResult<Vec<Transfer>> {
        self.get(endpoints::TRANSFERS).await
    }

    pub async fn create_transfer(&self, transfer: &TransferCreate) -> ClientResult<Ack> {
        self.post(endpoints::TRANSFERS, transfer).await
    }

    pub async fn update_transfer(&self, transfer: &TransferUpdate) -> ClientResult<Ack> {
        self.post(endpoints::TRANSFERS, transfer).await
    }

    pub async fn delete_transfer(&self, id: &str) -> ClientResult<()> {
        self.delete(&endpoints::entity(endpoints::TRANSFERS, id))
            .await
    }

    // ========== Flight Packages ==========

    pub async fn list_flight_packages(&self) -> ClientResult<Vec<FlightPackage>> {
        self.get(endpoints::FLIGHT_PACKAGES).await
    }

    pub async fn create_flight_package(&self, pkg: &FlightPackageCreate) -> ClientResult<Ack> {
        self.post(endpoints::FLIGHT_PACKAGES, pkg).await
    }

    pub async fn update_flight_package(&self, pkg: &FlightPackageUpdate) -> ClientResult<Ack> {
        self.post(endpoints::FLIGHT_PACKAGES, pkg).await
    }

    pub async fn delete_flight_package(&self, id: &str) -> ClientResult<()> {
        self.delete(&endpoints::entity(endpoints::FLIGHT_PACKAGES, id))
            .await
    }

    // ========== Packages ==========

    pub async fn list_packages(&self) -> ClientResult<Vec<Package>> {
        self.get(endpoints::PACKAGES).await
    }

    pub async fn create_package(&self, pkg: &PackageCreate) -> ClientResult<Ack> {
        self.post(endpoints::PACKAGES, pkg).await
    }

    pub async fn update_package(&self, pkg: &PackageUpdate) -> ClientResult<Ack> {
        self.post(endpoints::PACKAGES, pkg).await
    }

    pub async fn delete_package(&self, id: &str) -> ClientResult<()> {
        self.delete(&endpoints::entity(endpoints::PACKAGES, id))
            .await
    }
}
