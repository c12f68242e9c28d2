//! Names shared between the bootstrap, the steps and the CLI host

/// Name printed in the lifecycle banner
pub const TOOL_NAME: &str = "SpruceLoom";

/// Id of the coordinator plugin, attached to its log events
pub const PLUGIN_ID: &str = "spruce-loom";

/// Name of the extension registered into every configured project
pub const EXTENSION_NAME: &str = "loom";

/// Property toggling verbose diagnostics for one build
pub const DEBUG_PROPERTY: &str = "spruce.loom.debug";

/// Set by IntelliJ IDEA while it imports the project
pub const IDEA_SYNC_PROPERTY: &str = "idea.sync.active";

/// Reported as the host version in library diagnostics
pub const HOST_VERSION_PROPERTY: &str = "host.version";

pub const SETTINGS_FILE: &str = "spruce.json";
pub const PROPERTIES_FILE: &str = "spruce.properties";

pub const DEFAULT_JAVA_RELEASE: u32 = 17;
pub const DEFAULT_DECOMPILER: &str = "vineflower";
pub const INTERMEDIARY_COORDINATES: &str = "net.fabricmc:intermediary";

pub mod plugins {
    pub const JAVA: &str = "java";
    pub const JAVA_LIBRARY: &str = "java-library";
    pub const ECLIPSE: &str = "eclipse";
    pub const IDEA: &str = "idea";
    pub const MAVEN_PUBLISH: &str = "maven-publish";
}

pub mod repositories {
    pub const FABRIC_NAME: &str = "Fabric";
    pub const FABRIC_URL: &str = "https://maven.fabricmc.net/";
    pub const MOJANG_NAME: &str = "Mojang";
    pub const MOJANG_URL: &str = "https://libraries.minecraft.net/";
    pub const MAVEN_CENTRAL_NAME: &str = "MavenCentral";
    pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2/";
}

pub mod configurations {
    // Created by the java conventions
    pub const API: &str = "api";
    pub const IMPLEMENTATION: &str = "implementation";
    pub const COMPILE_ONLY: &str = "compileOnly";
    pub const RUNTIME_ONLY: &str = "runtimeOnly";
    pub const COMPILE_CLASSPATH: &str = "compileClasspath";
    pub const RUNTIME_CLASSPATH: &str = "runtimeClasspath";

    pub const MINECRAFT: &str = "minecraft";
    pub const MINECRAFT_NAMED: &str = "minecraftNamed";
    pub const MAPPINGS: &str = "mappings";
    pub const MAPPINGS_FINAL: &str = "mappingsFinal";
    pub const INCLUDE: &str = "include";
    pub const LOADER_LIBRARIES: &str = "loaderLibraries";

    pub const MOD_API: &str = "modApi";
    pub const MOD_IMPLEMENTATION: &str = "modImplementation";
    pub const MOD_COMPILE_ONLY: &str = "modCompileOnly";
    pub const MOD_RUNTIME_ONLY: &str = "modRuntimeOnly";
    pub const MOD_LOCAL_RUNTIME: &str = "modLocalRuntime";
}

pub mod tasks {
    pub const COMPILE_JAVA: &str = "compileJava";
    pub const JAR: &str = "jar";
    pub const SOURCES_JAR: &str = "sourcesJar";
    pub const BUILD: &str = "build";
    pub const PUBLISH: &str = "publish";
    pub const IDEA: &str = "idea";
    pub const ECLIPSE: &str = "eclipse";

    pub const REMAP_JAR: &str = "remapJar";
    pub const REMAP_SOURCES_JAR: &str = "remapSourcesJar";
    pub const DOWNLOAD_ASSETS: &str = "downloadAssets";
    pub const MIGRATE_MAPPINGS: &str = "migrateMappings";
    pub const VALIDATE_ACCESS_WIDENER: &str = "validateAccessWidener";
    pub const CLEAN_LOOM: &str = "cleanLoom";
    pub const CLEAN_LOOM_BINARIES: &str = "cleanLoomBinaries";
    pub const CLEAN_LOOM_MAPPINGS: &str = "cleanLoomMappings";
    pub const GEN_SOURCES: &str = "genSources";
    pub const GEN_IDEA_WORKSPACE: &str = "genIdeaWorkspace";
    pub const GEN_ECLIPSE_RUNS: &str = "genEclipseRuns";
    pub const VSCODE: &str = "vscode";
    pub const IDEA_SYNC: &str = "ideaSyncTask";
}

pub mod groups {
    pub const BUILD: &str = "build";
    pub const FABRIC: &str = "fabric";
    pub const IDE: &str = "ide";
}
