use {
    super::{
        AccessLevel::{List, PermissionsManagement, Read, Tagging, Write},
        ActionDefinition, ConditionKeyDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::{ArnTemplate, condop},
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "iam",
    "AWS Identity and Access Management",
    "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_identityandaccessmanagement.html",
    ACTIONS,
    RESOURCE_TYPES,
    CONDITION_KEYS,
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "AddClientIDToOpenIDConnectProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_AddClientIDToOpenIDConnectProvider.html",
    ),
    ActionDefinition::new(
        "AddRoleToInstanceProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_AddRoleToInstanceProfile.html",
    ),
    ActionDefinition::new(
        "AddUserToGroup",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_AddUserToGroup.html",
    ),
    ActionDefinition::new(
        "AttachGroupPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_AttachGroupPolicy.html",
    ),
    ActionDefinition::new(
        "AttachRolePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_AttachRolePolicy.html",
    ),
    ActionDefinition::new(
        "AttachUserPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_AttachUserPolicy.html",
    ),
    ActionDefinition::new(
        "ChangePassword",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ChangePassword.html",
    ),
    ActionDefinition::new(
        "CreateAccessKey",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateAccessKey.html",
    ),
    ActionDefinition::new(
        "CreateAccountAlias",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateAccountAlias.html",
    ),
    ActionDefinition::new(
        "CreateGroup",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateGroup.html",
    ),
    ActionDefinition::new(
        "CreateInstanceProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateInstanceProfile.html",
    ),
    ActionDefinition::new(
        "CreateLoginProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateLoginProfile.html",
    ),
    ActionDefinition::new(
        "CreateOpenIDConnectProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateOpenIDConnectProvider.html",
    ),
    ActionDefinition::new(
        "CreatePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreatePolicy.html",
    ),
    ActionDefinition::new(
        "CreatePolicyVersion",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreatePolicyVersion.html",
    ),
    ActionDefinition::new(
        "CreateRole",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateRole.html",
    ),
    ActionDefinition::new(
        "CreateSAMLProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateSAMLProvider.html",
    ),
    ActionDefinition::new(
        "CreateServiceLinkedRole",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateServiceLinkedRole.html",
    ),
    ActionDefinition::new(
        "CreateServiceSpecificCredential",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateServiceSpecificCredential.html",
    ),
    ActionDefinition::new(
        "CreateUser",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateUser.html",
    ),
    ActionDefinition::new(
        "CreateVirtualMFADevice",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateVirtualMFADevice.html",
    ),
    ActionDefinition::new(
        "DeactivateMFADevice",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeactivateMFADevice.html",
    ),
    ActionDefinition::new(
        "DeleteAccessKey",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteAccessKey.html",
    ),
    ActionDefinition::new(
        "DeleteAccountAlias",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteAccountAlias.html",
    ),
    ActionDefinition::new(
        "DeleteAccountPasswordPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteAccountPasswordPolicy.html",
    ),
    ActionDefinition::new(
        "DeleteGroup",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteGroup.html",
    ),
    ActionDefinition::new(
        "DeleteGroupPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteGroupPolicy.html",
    ),
    ActionDefinition::new(
        "DeleteInstanceProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteInstanceProfile.html",
    ),
    ActionDefinition::new(
        "DeleteLoginProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteLoginProfile.html",
    ),
    ActionDefinition::new(
        "DeleteOpenIDConnectProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteOpenIDConnectProvider.html",
    ),
    ActionDefinition::new(
        "DeletePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeletePolicy.html",
    ),
    ActionDefinition::new(
        "DeletePolicyVersion",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeletePolicyVersion.html",
    ),
    ActionDefinition::new(
        "DeleteRole",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteRole.html",
    ),
    ActionDefinition::new(
        "DeleteRolePermissionsBoundary",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteRolePermissionsBoundary.html",
    ),
    ActionDefinition::new(
        "DeleteRolePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteRolePolicy.html",
    ),
    ActionDefinition::new(
        "DeleteSAMLProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteSAMLProvider.html",
    ),
    ActionDefinition::new(
        "DeleteSSHPublicKey",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteSSHPublicKey.html",
    ),
    ActionDefinition::new(
        "DeleteServerCertificate",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteServerCertificate.html",
    ),
    ActionDefinition::new(
        "DeleteServiceLinkedRole",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteServiceLinkedRole.html",
    ),
    ActionDefinition::new(
        "DeleteServiceSpecificCredential",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteServiceSpecificCredential.html",
    ),
    ActionDefinition::new(
        "DeleteSigningCertificate",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteSigningCertificate.html",
    ),
    ActionDefinition::new(
        "DeleteUser",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteUser.html",
    ),
    ActionDefinition::new(
        "DeleteUserPermissionsBoundary",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteUserPermissionsBoundary.html",
    ),
    ActionDefinition::new(
        "DeleteUserPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteUserPolicy.html",
    ),
    ActionDefinition::new(
        "DeleteVirtualMFADevice",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DeleteVirtualMFADevice.html",
    ),
    ActionDefinition::new(
        "DetachGroupPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DetachGroupPolicy.html",
    ),
    ActionDefinition::new(
        "DetachRolePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DetachRolePolicy.html",
    ),
    ActionDefinition::new(
        "DetachUserPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_DetachUserPolicy.html",
    ),
    ActionDefinition::new(
        "EnableMFADevice",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_EnableMFADevice.html",
    ),
    ActionDefinition::new(
        "GenerateCredentialReport",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GenerateCredentialReport.html",
    ),
    ActionDefinition::new(
        "GenerateOrganizationsAccessReport",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GenerateOrganizationsAccessReport.html",
    ),
    ActionDefinition::new(
        "GenerateServiceLastAccessedDetails",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GenerateServiceLastAccessedDetails.html",
    ),
    ActionDefinition::new(
        "GetAccessKeyLastUsed",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetAccessKeyLastUsed.html",
    ),
    ActionDefinition::new(
        "GetAccountAuthorizationDetails",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetAccountAuthorizationDetails.html",
    ),
    ActionDefinition::new(
        "GetAccountPasswordPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetAccountPasswordPolicy.html",
    ),
    ActionDefinition::new(
        "GetAccountSummary",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetAccountSummary.html",
    ),
    ActionDefinition::new(
        "GetContextKeysForCustomPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetContextKeysForCustomPolicy.html",
    ),
    ActionDefinition::new(
        "GetContextKeysForPrincipalPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetContextKeysForPrincipalPolicy.html",
    ),
    ActionDefinition::new(
        "GetCredentialReport",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetCredentialReport.html",
    ),
    ActionDefinition::new("GetGroup", Read, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetGroup.html"),
    ActionDefinition::new(
        "GetGroupPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetGroupPolicy.html",
    ),
    ActionDefinition::new(
        "GetInstanceProfile",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetInstanceProfile.html",
    ),
    ActionDefinition::new(
        "GetLoginProfile",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetLoginProfile.html",
    ),
    ActionDefinition::new(
        "GetOpenIDConnectProvider",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetOpenIDConnectProvider.html",
    ),
    ActionDefinition::new(
        "GetOrganizationsAccessReport",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetOrganizationsAccessReport.html",
    ),
    ActionDefinition::new("GetPolicy", Read, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetPolicy.html"),
    ActionDefinition::new(
        "GetPolicyVersion",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetPolicyVersion.html",
    ),
    ActionDefinition::new("GetRole", Read, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetRole.html"),
    ActionDefinition::new(
        "GetRolePolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetRolePolicy.html",
    ),
    ActionDefinition::new(
        "GetSAMLProvider",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetSAMLProvider.html",
    ),
    ActionDefinition::new(
        "GetSSHPublicKey",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetSSHPublicKey.html",
    ),
    ActionDefinition::new(
        "GetServerCertificate",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetServerCertificate.html",
    ),
    ActionDefinition::new(
        "GetServiceLastAccessedDetails",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetServiceLastAccessedDetails.html",
    ),
    ActionDefinition::new(
        "GetServiceLastAccessedDetailsWithEntities",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetServiceLastAccessedDetailsWithEntities.html",
    ),
    ActionDefinition::new(
        "GetServiceLinkedRoleDeletionStatus",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetServiceLinkedRoleDeletionStatus.html",
    ),
    ActionDefinition::new("GetUser", Read, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetUser.html"),
    ActionDefinition::new(
        "GetUserPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetUserPolicy.html",
    ),
    ActionDefinition::new(
        "ListAccessKeys",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListAccessKeys.html",
    ),
    ActionDefinition::new(
        "ListAccountAliases",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListAccountAliases.html",
    ),
    ActionDefinition::new(
        "ListAttachedGroupPolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListAttachedGroupPolicies.html",
    ),
    ActionDefinition::new(
        "ListAttachedRolePolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListAttachedRolePolicies.html",
    ),
    ActionDefinition::new(
        "ListAttachedUserPolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListAttachedUserPolicies.html",
    ),
    ActionDefinition::new(
        "ListEntitiesForPolicy",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListEntitiesForPolicy.html",
    ),
    ActionDefinition::new(
        "ListGroupPolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListGroupPolicies.html",
    ),
    ActionDefinition::new(
        "ListGroups",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListGroups.html",
    ),
    ActionDefinition::new(
        "ListGroupsForUser",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListGroupsForUser.html",
    ),
    ActionDefinition::new(
        "ListInstanceProfiles",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListInstanceProfiles.html",
    ),
    ActionDefinition::new(
        "ListInstanceProfilesForRole",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListInstanceProfilesForRole.html",
    ),
    ActionDefinition::new(
        "ListMFADevices",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListMFADevices.html",
    ),
    ActionDefinition::new(
        "ListOpenIDConnectProviders",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListOpenIDConnectProviders.html",
    ),
    ActionDefinition::new(
        "ListPolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListPolicies.html",
    ),
    ActionDefinition::new(
        "ListPoliciesGrantingServiceAccess",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListPoliciesGrantingServiceAccess.html",
    ),
    ActionDefinition::new(
        "ListPolicyVersions",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListPolicyVersions.html",
    ),
    ActionDefinition::new(
        "ListRolePolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListRolePolicies.html",
    ),
    ActionDefinition::new(
        "ListRoleTags",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListRoleTags.html",
    ),
    ActionDefinition::new("ListRoles", List, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListRoles.html"),
    ActionDefinition::new(
        "ListSAMLProviders",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListSAMLProviders.html",
    ),
    ActionDefinition::new(
        "ListSSHPublicKeys",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListSSHPublicKeys.html",
    ),
    ActionDefinition::new(
        "ListServerCertificates",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListServerCertificates.html",
    ),
    ActionDefinition::new(
        "ListServiceSpecificCredentials",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListServiceSpecificCredentials.html",
    ),
    ActionDefinition::new(
        "ListSigningCertificates",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListSigningCertificates.html",
    ),
    ActionDefinition::new(
        "ListUserPolicies",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListUserPolicies.html",
    ),
    ActionDefinition::new(
        "ListUserTags",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListUserTags.html",
    ),
    ActionDefinition::new("ListUsers", List, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListUsers.html"),
    ActionDefinition::new(
        "ListVirtualMFADevices",
        List,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ListVirtualMFADevices.html",
    ),
    ActionDefinition::new(
        "PassRole",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/UserGuide/id_roles_use_passrole.html",
    ),
    ActionDefinition::new(
        "PutGroupPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_PutGroupPolicy.html",
    ),
    ActionDefinition::new(
        "PutRolePermissionsBoundary",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_PutRolePermissionsBoundary.html",
    ),
    ActionDefinition::new(
        "PutRolePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_PutRolePolicy.html",
    ),
    ActionDefinition::new(
        "PutUserPermissionsBoundary",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_PutUserPermissionsBoundary.html",
    ),
    ActionDefinition::new(
        "PutUserPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_PutUserPolicy.html",
    ),
    ActionDefinition::new(
        "RemoveClientIDFromOpenIDConnectProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_RemoveClientIDFromOpenIDConnectProvider.html",
    ),
    ActionDefinition::new(
        "RemoveRoleFromInstanceProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_RemoveRoleFromInstanceProfile.html",
    ),
    ActionDefinition::new(
        "RemoveUserFromGroup",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_RemoveUserFromGroup.html",
    ),
    ActionDefinition::new(
        "ResetServiceSpecificCredential",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ResetServiceSpecificCredential.html",
    ),
    ActionDefinition::new(
        "ResyncMFADevice",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_ResyncMFADevice.html",
    ),
    ActionDefinition::new(
        "SetDefaultPolicyVersion",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_SetDefaultPolicyVersion.html",
    ),
    ActionDefinition::new(
        "SetSecurityTokenServicePreferences",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_SetSecurityTokenServicePreferences.html",
    ),
    ActionDefinition::new(
        "SimulateCustomPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_SimulateCustomPolicy.html",
    ),
    ActionDefinition::new(
        "SimulatePrincipalPolicy",
        Read,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_SimulatePrincipalPolicy.html",
    ),
    ActionDefinition::new("TagRole", Tagging, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_TagRole.html"),
    ActionDefinition::new("TagUser", Tagging, "https://docs.aws.amazon.com/IAM/latest/APIReference/API_TagUser.html"),
    ActionDefinition::new(
        "UntagRole",
        Tagging,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UntagRole.html",
    ),
    ActionDefinition::new(
        "UntagUser",
        Tagging,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UntagUser.html",
    ),
    ActionDefinition::new(
        "UpdateAccessKey",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateAccessKey.html",
    ),
    ActionDefinition::new(
        "UpdateAccountPasswordPolicy",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateAccountPasswordPolicy.html",
    ),
    ActionDefinition::new(
        "UpdateAssumeRolePolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateAssumeRolePolicy.html",
    ),
    ActionDefinition::new(
        "UpdateGroup",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateGroup.html",
    ),
    ActionDefinition::new(
        "UpdateLoginProfile",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateLoginProfile.html",
    ),
    ActionDefinition::new(
        "UpdateOpenIDConnectProviderThumbprint",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateOpenIDConnectProviderThumbprint.html",
    ),
    ActionDefinition::new(
        "UpdateRole",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateRole.html",
    ),
    ActionDefinition::new(
        "UpdateRoleDescription",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateRoleDescription.html",
    ),
    ActionDefinition::new(
        "UpdateSAMLProvider",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateSAMLProvider.html",
    ),
    ActionDefinition::new(
        "UpdateSSHPublicKey",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateSSHPublicKey.html",
    ),
    ActionDefinition::new(
        "UpdateServerCertificate",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateServerCertificate.html",
    ),
    ActionDefinition::new(
        "UpdateServiceSpecificCredential",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateServiceSpecificCredential.html",
    ),
    ActionDefinition::new(
        "UpdateSigningCertificate",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateSigningCertificate.html",
    ),
    ActionDefinition::new(
        "UpdateUser",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UpdateUser.html",
    ),
    ActionDefinition::new(
        "UploadSSHPublicKey",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UploadSSHPublicKey.html",
    ),
    ActionDefinition::new(
        "UploadServerCertificate",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UploadServerCertificate.html",
    ),
    ActionDefinition::new(
        "UploadSigningCertificate",
        Write,
        "https://docs.aws.amazon.com/IAM/latest/APIReference/API_UploadSigningCertificate.html",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "access-report",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:access-report/${EntityPath}"),
    ),
    ResourceTypeDefinition::new(
        "assumed-role",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:assumed-role/${RoleName}/${RoleSessionName}"),
    ),
    ResourceTypeDefinition::new(
        "federated-user",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:federated-user/${UserName}"),
    ),
    ResourceTypeDefinition::new(
        "group",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:group/${GroupNameWithPath}"),
    ),
    ResourceTypeDefinition::new(
        "instance-profile",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:instance-profile/${InstanceProfileNameWithPath}"),
    ),
    ResourceTypeDefinition::new("mfa", ArnTemplate::new("arn:${Partition}:iam::${Account}:mfa/${MfaTokenIdWithPath}")),
    ResourceTypeDefinition::new(
        "oidc-provider",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:oidc-provider/${OidcProviderName}"),
    ),
    ResourceTypeDefinition::new(
        "policy",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:policy/${PolicyNameWithPath}"),
    ),
    ResourceTypeDefinition::new("role", ArnTemplate::new("arn:${Partition}:iam::${Account}:role/${RoleNameWithPath}")),
    ResourceTypeDefinition::new(
        "saml-provider",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:saml-provider/${SamlProviderName}"),
    ),
    ResourceTypeDefinition::new(
        "server-certificate",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:server-certificate/${CertificateNameWithPath}"),
    ),
    ResourceTypeDefinition::new(
        "sms-mfa",
        ArnTemplate::new("arn:${Partition}:iam::${Account}:sms-mfa/${MfaTokenIdWithPath}"),
    ),
    ResourceTypeDefinition::new("user", ArnTemplate::new("arn:${Partition}:iam::${Account}:user/${UserNameWithPath}")),
];

const CONDITION_KEYS: &[ConditionKeyDefinition] = &[
    ConditionKeyDefinition::new("iam:AWSServiceName", condop::StringLike),
    ConditionKeyDefinition::new("iam:AssociatedResourceArn", condop::ArnLike),
    ConditionKeyDefinition::new("iam:OrganizationsPolicyId", condop::StringLike),
    ConditionKeyDefinition::new("iam:PassedToService", condop::StringLike),
    ConditionKeyDefinition::new("iam:PermissionsBoundary", condop::StringLike),
    ConditionKeyDefinition::new("iam:PolicyARN", condop::ArnLike),
    ConditionKeyDefinition::new("iam:ResourceTag/${TagKey}", condop::StringLike),
];
