//! Demo-environment description
//!
//! An `Environment` is assembled fresh on every invocation from compiled
//! defaults plus CLI flags; nothing in it is persisted anywhere.

use std::path::{Path, PathBuf};

/// Build context name of the Envoy data-plane image under `images/`
pub const GATEWAY_IMAGE: &str = "gateway";

/// Build context name of the Node.js sample-app image under `images/`
pub const NODE_IMAGE: &str = "node";

/// Names, tags and paths describing the demo environment
#[derive(Debug, Clone)]
pub struct Environment {
    /// Name of the kind cluster
    pub cluster_name: String,
    /// Registry-less prefix for locally-built images
    pub image_prefix: String,
    /// Tag applied to locally-built images
    pub image_tag: String,
    /// Directory holding one build context per image
    pub images_dir: PathBuf,
    /// Directory holding the static deployment manifests
    pub deploy_dir: PathBuf,
    /// Namespace the operator runs in
    pub system_namespace: String,
    /// Deployment name of the Envoy data plane
    pub proxy_deployment: String,
    /// Deployment name of the control-plane operator
    pub operator_deployment: String,
    /// Init container inside the proxy pods
    pub init_container: String,
    /// Port the proxy listens on inside the cluster
    pub proxy_port: u16,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            cluster_name: "gateway-demo".to_string(),
            image_prefix: "gateway-demo".to_string(),
            image_tag: "dev".to_string(),
            images_dir: PathBuf::from("images"),
            deploy_dir: PathBuf::from("deploy"),
            system_namespace: "gateway-system".to_string(),
            proxy_deployment: "gateway-proxy".to_string(),
            operator_deployment: "gateway-operator".to_string(),
            init_container: "proxy-init".to_string(),
            proxy_port: 8080,
        }
    }
}

impl Environment {
    /// Full image reference for a build context name.
    pub fn image_ref(&self, name: &str) -> String {
        format!("{}/{}:{}", self.image_prefix, name, self.image_tag)
    }

    /// Path of a manifest under the deploy directory.
    pub fn manifest(&self, file: impl AsRef<Path>) -> PathBuf {
        self.deploy_dir.join(file)
    }

    /// kubectl target for the proxy deployment (`deploy/<name>`).
    pub fn proxy_target(&self) -> String {
        format!("deploy/{}", self.proxy_deployment)
    }

    /// kubectl target for the operator deployment (`deploy/<name>`).
    pub fn operator_target(&self) -> String {
        format!("deploy/{}", self.operator_deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_combines_prefix_name_and_tag() {
        let env = Environment::default();
        assert_eq!(env.image_ref("node"), "gateway-demo/node:dev");
    }

    #[test]
    fn image_ref_honors_overrides() {
        let env = Environment {
            image_prefix: "acme".into(),
            image_tag: "v2".into(),
            ..Environment::default()
        };
        assert_eq!(env.image_ref(GATEWAY_IMAGE), "acme/gateway:v2");
    }

    #[test]
    fn manifest_paths_live_under_deploy_dir() {
        let env = Environment::default();
        assert_eq!(env.manifest("simple.yaml"), PathBuf::from("deploy/simple.yaml"));
    }

    #[test]
    fn kubectl_targets_use_deploy_shorthand() {
        let env = Environment::default();
        assert_eq!(env.proxy_target(), "deploy/gateway-proxy");
        assert_eq!(env.operator_target(), "deploy/gateway-operator");
    }
}
