//! Connection formulas

use crate::connector::FigmaConnector;
use crate::error::{Result, ResultExt};
use crate::mapper;
use crate::schema::{ConnectionInfo, TeamAccess};
use crate::urls;
use tracing::{debug, info};

impl FigmaConnector {
    /// Display name of the connected account
    ///
    /// Never fails: any error falls back to a generic name.
    pub async fn connection_name(&self) -> String {
        match self.api().me().await {
            Ok(me) => mapper::connection_name(&me),
            Err(e) => {
                debug!("Could not resolve connection name: {e}");
                mapper::DEFAULT_CONNECTION_NAME.to_string()
            }
        }
    }

    /// `TestConnection`
    pub async fn test_connection(&self) -> Result<ConnectionInfo> {
        let me = self.api().me().await.upstream("Failed to connect to Figma")?;
        Ok(mapper::connection_info(&me))
    }

    /// `TestTeamAccess`: counts the components on the first page of the team
    pub async fn test_team_access(&self, team_url: &str) -> Result<TeamAccess> {
        let team_id = urls::team_id(team_url)?;
        let response = self
            .api()
            .team_components(&team_id)
            .await
            .upstream("Failed to access team")?;

        let count = response.meta.components.len() as u64;
        info!("Team {team_id} is accessible ({count} components on first page)");

        Ok(TeamAccess {
            team_id,
            component_count: count,
            status: format!("Successfully connected! Found {count} components in team."),
        })
    }
}
